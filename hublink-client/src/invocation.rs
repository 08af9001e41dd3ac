// Copyright 2025 The HubLink Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use cheetah_string::CheetahString;
use hublink_error::HubError;
use hublink_error::HubResult;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// One incoming invocation of a named client method.
///
/// This is the unit the dispatch service consumes: a target name plus the raw
/// positional arguments, still undecoded. The optional invocation id is
/// carried through untouched for callers that correlate invocations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationMessage {
    pub target: CheetahString,
    #[serde(default)]
    pub arguments: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invocation_id: Option<CheetahString>,
}

impl InvocationMessage {
    pub fn new(target: impl Into<CheetahString>, arguments: Vec<Value>) -> Self {
        Self {
            target: target.into(),
            arguments,
            invocation_id: None,
        }
    }

    pub fn with_invocation_id(mut self, invocation_id: impl Into<CheetahString>) -> Self {
        self.invocation_id = Some(invocation_id.into());
        self
    }

    /// Decode an invocation from its JSON wire shape.
    pub fn decode(payload: &[u8]) -> HubResult<Self> {
        serde_json::from_slice(payload).map_err(|e| HubError::invalid_invocation(e.to_string()))
    }
}

impl fmt::Display for InvocationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InvocationMessage [target={}, arguments={}]",
            self.target,
            self.arguments.len()
        )
    }
}
