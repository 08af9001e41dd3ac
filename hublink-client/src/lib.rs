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

//! Typed callback contracts, handler registration and invocation dispatch for
//! hub-style messaging clients.
//!
//! The crate is built around three pieces:
//! - the [`handler::action`] contracts (`Action0`..`Action5`), each naming a
//!   callback shape of a fixed arity;
//! - the [`registry::HandlerRegistry`], a multi-subscriber map from target
//!   name to registered handlers;
//! - the [`dispatch::InvocationDispatchService`], which drains incoming
//!   [`invocation::InvocationMessage`]s and feeds them through the registry.

pub mod dispatch;
pub mod handler;
pub mod invocation;
pub mod registry;

pub use dispatch::DispatchServiceConfig;
pub use dispatch::InvocationDispatchService;
pub use handler::action::Action0;
pub use handler::action::Action1;
pub use handler::action::Action2;
pub use handler::action::Action3;
pub use handler::action::Action4;
pub use handler::action::Action5;
pub use handler::invocation_handler::InvocationHandler;
pub use handler::subscription::Subscription;
pub use invocation::InvocationMessage;
pub use registry::HandlerRegistry;
