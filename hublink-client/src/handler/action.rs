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

//! Callback contracts for client method handlers.
//!
//! Each `ActionN` trait names one shape of callback: a unit of behavior that
//! accepts exactly N typed inputs and produces no result. The contracts are
//! stateless and carry no error taxonomy of their own; whatever a callback
//! does internally is entirely the implementer's business. Blanket
//! implementations make any matching closure usable wherever a contract is
//! expected, so most callers never implement these traits by hand.

/// A callback that takes no parameters.
pub trait Action0 {
    fn invoke(&self);
}

impl<F> Action0 for F
where
    F: Fn(),
{
    fn invoke(&self) {
        self()
    }
}

/// A callback that takes one parameter.
pub trait Action1<T1> {
    fn invoke(&self, param1: T1);
}

impl<F, T1> Action1<T1> for F
where
    F: Fn(T1),
{
    fn invoke(&self, param1: T1) {
        self(param1)
    }
}

/// A callback that takes two parameters.
pub trait Action2<T1, T2> {
    fn invoke(&self, param1: T1, param2: T2);
}

impl<F, T1, T2> Action2<T1, T2> for F
where
    F: Fn(T1, T2),
{
    fn invoke(&self, param1: T1, param2: T2) {
        self(param1, param2)
    }
}

/// A callback that takes three parameters.
pub trait Action3<T1, T2, T3> {
    fn invoke(&self, param1: T1, param2: T2, param3: T3);
}

impl<F, T1, T2, T3> Action3<T1, T2, T3> for F
where
    F: Fn(T1, T2, T3),
{
    fn invoke(&self, param1: T1, param2: T2, param3: T3) {
        self(param1, param2, param3)
    }
}

/// A callback that takes four parameters.
pub trait Action4<T1, T2, T3, T4> {
    fn invoke(&self, param1: T1, param2: T2, param3: T3, param4: T4);
}

impl<F, T1, T2, T3, T4> Action4<T1, T2, T3, T4> for F
where
    F: Fn(T1, T2, T3, T4),
{
    fn invoke(&self, param1: T1, param2: T2, param3: T3, param4: T4) {
        self(param1, param2, param3, param4)
    }
}

/// A callback that takes five parameters.
///
/// The five type parameters are independent and unconstrained; each one fixes
/// the semantic type of the positional argument at the same index. Invoking
/// the callback runs the implementation's body exactly once, with the five
/// values passed through unmodified and in order.
pub trait Action5<T1, T2, T3, T4, T5> {
    /// Invoke the callback with five concrete argument values.
    fn invoke(&self, param1: T1, param2: T2, param3: T3, param4: T4, param5: T5);
}

impl<F, T1, T2, T3, T4, T5> Action5<T1, T2, T3, T4, T5> for F
where
    F: Fn(T1, T2, T3, T4, T5),
{
    fn invoke(&self, param1: T1, param2: T2, param3: T3, param4: T4, param5: T5) {
        self(param1, param2, param3, param4, param5)
    }
}
