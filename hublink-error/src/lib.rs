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

//! Unified error handling for the hublink crates.
//!
//! Every fallible operation in the handler registration and dispatch path
//! returns [`HubResult`], so callers propagate failures with `?` and match on
//! [`HubError`] when they need to react to a specific category.

use thiserror::Error;

pub type HubResult<T> = Result<T, HubError>;

/// Errors raised while binding or dispatching client invocations.
#[derive(Debug, Error)]
pub enum HubError {
    /// An invocation carried a different number of arguments than the handler
    /// was registered for.
    #[error("target '{target}' expects {expected} argument(s), got {actual}")]
    ArgumentCountMismatch {
        target: String,
        expected: usize,
        actual: usize,
    },

    /// A positional argument could not be decoded into the type the handler
    /// was registered with.
    #[error("target '{target}': failed to decode argument {index}: {message}")]
    ArgumentDecode {
        target: String,
        index: usize,
        message: String,
    },

    /// An invocation message itself could not be decoded.
    #[error("invalid invocation message: {0}")]
    InvalidInvocation(String),
}

impl HubError {
    /// Create an argument count mismatch error
    #[inline]
    pub fn argument_count_mismatch(target: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ArgumentCountMismatch {
            target: target.into(),
            expected,
            actual,
        }
    }

    /// Create an argument decode error
    #[inline]
    pub fn argument_decode(target: impl Into<String>, index: usize, message: impl Into<String>) -> Self {
        Self::ArgumentDecode {
            target: target.into(),
            index,
            message: message.into(),
        }
    }

    /// Create an invalid invocation error
    #[inline]
    pub fn invalid_invocation(message: impl Into<String>) -> Self {
        Self::InvalidInvocation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_count_mismatch_display() {
        let err = HubError::argument_count_mismatch("Send", 5, 3);
        assert_eq!(err.to_string(), "target 'Send' expects 5 argument(s), got 3");
    }

    #[test]
    fn argument_decode_display() {
        let err = HubError::argument_decode("Send", 2, "invalid type: string, expected i32");
        assert_eq!(
            err.to_string(),
            "target 'Send': failed to decode argument 2: invalid type: string, expected i32"
        );
    }

    #[test]
    fn invalid_invocation_display() {
        let err = HubError::invalid_invocation("missing target");
        assert_eq!(err.to_string(), "invalid invocation message: missing target");
    }
}
