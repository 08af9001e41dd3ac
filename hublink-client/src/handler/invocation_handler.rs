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

use cheetah_string::CheetahString;
use hublink_error::HubError;
use hublink_error::HubResult;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::handler::action::Action0;
use crate::handler::action::Action1;
use crate::handler::action::Action2;
use crate::handler::action::Action3;
use crate::handler::action::Action4;
use crate::handler::action::Action5;

type ErasedCallback = Box<dyn Fn(&[Value]) -> HubResult<()> + Send + Sync>;

/// The type-erased form of a registered callback.
///
/// An `InvocationHandler` binds a typed `ActionN` to the decoding of its N
/// positional arguments from raw JSON values, behind a uniform call surface
/// the registry can store. The argument count is checked before any decoding
/// happens; the typed callback only runs once every argument has decoded, so
/// a half-decoded invocation never reaches user code.
pub struct InvocationHandler {
    target: CheetahString,
    argument_count: usize,
    callback: ErasedCallback,
}

fn decode_argument<T>(target: &CheetahString, args: &[Value], index: usize) -> HubResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(args[index].clone())
        .map_err(|e| HubError::argument_decode(target.as_str(), index, e.to_string()))
}

impl InvocationHandler {
    pub fn new0<A>(target: CheetahString, action: A) -> Self
    where
        A: Action0 + Send + Sync + 'static,
    {
        Self {
            target,
            argument_count: 0,
            callback: Box::new(move |_args: &[Value]| -> HubResult<()> {
                action.invoke();
                Ok(())
            }),
        }
    }

    pub fn new1<T1, A>(target: CheetahString, action: A) -> Self
    where
        T1: DeserializeOwned,
        A: Action1<T1> + Send + Sync + 'static,
    {
        let name = target.clone();
        Self {
            target,
            argument_count: 1,
            callback: Box::new(move |args: &[Value]| -> HubResult<()> {
                let param1 = decode_argument::<T1>(&name, args, 0)?;
                action.invoke(param1);
                Ok(())
            }),
        }
    }

    pub fn new2<T1, T2, A>(target: CheetahString, action: A) -> Self
    where
        T1: DeserializeOwned,
        T2: DeserializeOwned,
        A: Action2<T1, T2> + Send + Sync + 'static,
    {
        let name = target.clone();
        Self {
            target,
            argument_count: 2,
            callback: Box::new(move |args: &[Value]| -> HubResult<()> {
                let param1 = decode_argument::<T1>(&name, args, 0)?;
                let param2 = decode_argument::<T2>(&name, args, 1)?;
                action.invoke(param1, param2);
                Ok(())
            }),
        }
    }

    pub fn new3<T1, T2, T3, A>(target: CheetahString, action: A) -> Self
    where
        T1: DeserializeOwned,
        T2: DeserializeOwned,
        T3: DeserializeOwned,
        A: Action3<T1, T2, T3> + Send + Sync + 'static,
    {
        let name = target.clone();
        Self {
            target,
            argument_count: 3,
            callback: Box::new(move |args: &[Value]| -> HubResult<()> {
                let param1 = decode_argument::<T1>(&name, args, 0)?;
                let param2 = decode_argument::<T2>(&name, args, 1)?;
                let param3 = decode_argument::<T3>(&name, args, 2)?;
                action.invoke(param1, param2, param3);
                Ok(())
            }),
        }
    }

    pub fn new4<T1, T2, T3, T4, A>(target: CheetahString, action: A) -> Self
    where
        T1: DeserializeOwned,
        T2: DeserializeOwned,
        T3: DeserializeOwned,
        T4: DeserializeOwned,
        A: Action4<T1, T2, T3, T4> + Send + Sync + 'static,
    {
        let name = target.clone();
        Self {
            target,
            argument_count: 4,
            callback: Box::new(move |args: &[Value]| -> HubResult<()> {
                let param1 = decode_argument::<T1>(&name, args, 0)?;
                let param2 = decode_argument::<T2>(&name, args, 1)?;
                let param3 = decode_argument::<T3>(&name, args, 2)?;
                let param4 = decode_argument::<T4>(&name, args, 3)?;
                action.invoke(param1, param2, param3, param4);
                Ok(())
            }),
        }
    }

    pub fn new5<T1, T2, T3, T4, T5, A>(target: CheetahString, action: A) -> Self
    where
        T1: DeserializeOwned,
        T2: DeserializeOwned,
        T3: DeserializeOwned,
        T4: DeserializeOwned,
        T5: DeserializeOwned,
        A: Action5<T1, T2, T3, T4, T5> + Send + Sync + 'static,
    {
        let name = target.clone();
        Self {
            target,
            argument_count: 5,
            callback: Box::new(move |args: &[Value]| -> HubResult<()> {
                let param1 = decode_argument::<T1>(&name, args, 0)?;
                let param2 = decode_argument::<T2>(&name, args, 1)?;
                let param3 = decode_argument::<T3>(&name, args, 2)?;
                let param4 = decode_argument::<T4>(&name, args, 3)?;
                let param5 = decode_argument::<T5>(&name, args, 4)?;
                action.invoke(param1, param2, param3, param4, param5);
                Ok(())
            }),
        }
    }

    pub fn target(&self) -> &CheetahString {
        &self.target
    }

    pub fn argument_count(&self) -> usize {
        self.argument_count
    }

    /// Invoke the bound callback with the raw arguments of one invocation.
    pub fn invoke(&self, args: &[Value]) -> HubResult<()> {
        if args.len() != self.argument_count {
            return Err(HubError::argument_count_mismatch(
                self.target.as_str(),
                self.argument_count,
                args.len(),
            ));
        }
        (self.callback)(args)
    }
}
