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

use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use cheetah_string::CheetahString;
use hublink_error::HubResult;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use crate::handler::action::Action0;
use crate::handler::action::Action1;
use crate::handler::action::Action2;
use crate::handler::action::Action3;
use crate::handler::action::Action4;
use crate::handler::action::Action5;
use crate::handler::invocation_handler::InvocationHandler;
use crate::handler::subscription::Subscription;

struct RegisteredHandler {
    id: u64,
    handler: Arc<InvocationHandler>,
}

/// Map from target name to the handlers registered for it.
///
/// Several handlers may be registered for one target; `dispatch` invokes them
/// in registration order, each exactly once. Registration returns a
/// [`Subscription`] naming exactly the handler it added, so callers can
/// unregister one handler without disturbing its siblings.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: RwLock<HashMap<CheetahString, Vec<RegisteredHandler>>>,
    next_id: AtomicU64,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on0<A>(&self, target: impl Into<CheetahString>, action: A) -> Subscription
    where
        A: Action0 + Send + Sync + 'static,
    {
        let target = target.into();
        self.register(InvocationHandler::new0(target, action))
    }

    pub fn on1<T1, A>(&self, target: impl Into<CheetahString>, action: A) -> Subscription
    where
        T1: DeserializeOwned,
        A: Action1<T1> + Send + Sync + 'static,
    {
        let target = target.into();
        self.register(InvocationHandler::new1(target, action))
    }

    pub fn on2<T1, T2, A>(&self, target: impl Into<CheetahString>, action: A) -> Subscription
    where
        T1: DeserializeOwned,
        T2: DeserializeOwned,
        A: Action2<T1, T2> + Send + Sync + 'static,
    {
        let target = target.into();
        self.register(InvocationHandler::new2(target, action))
    }

    pub fn on3<T1, T2, T3, A>(&self, target: impl Into<CheetahString>, action: A) -> Subscription
    where
        T1: DeserializeOwned,
        T2: DeserializeOwned,
        T3: DeserializeOwned,
        A: Action3<T1, T2, T3> + Send + Sync + 'static,
    {
        let target = target.into();
        self.register(InvocationHandler::new3(target, action))
    }

    pub fn on4<T1, T2, T3, T4, A>(&self, target: impl Into<CheetahString>, action: A) -> Subscription
    where
        T1: DeserializeOwned,
        T2: DeserializeOwned,
        T3: DeserializeOwned,
        T4: DeserializeOwned,
        A: Action4<T1, T2, T3, T4> + Send + Sync + 'static,
    {
        let target = target.into();
        self.register(InvocationHandler::new4(target, action))
    }

    pub fn on5<T1, T2, T3, T4, T5, A>(&self, target: impl Into<CheetahString>, action: A) -> Subscription
    where
        T1: DeserializeOwned,
        T2: DeserializeOwned,
        T3: DeserializeOwned,
        T4: DeserializeOwned,
        T5: DeserializeOwned,
        A: Action5<T1, T2, T3, T4, T5> + Send + Sync + 'static,
    {
        let target = target.into();
        self.register(InvocationHandler::new5(target, action))
    }

    fn register(&self, handler: InvocationHandler) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let target = handler.target().clone();
        self.handlers
            .write()
            .entry(target.clone())
            .or_default()
            .push(RegisteredHandler {
                id,
                handler: Arc::new(handler),
            });
        Subscription { target, id }
    }

    /// Unregister the one handler the subscription names.
    ///
    /// Returns `false` when the handler was already removed.
    pub fn remove(&self, subscription: &Subscription) -> bool {
        let mut guard = self.handlers.write();
        let Some(list) = guard.get_mut(&subscription.target) else {
            return false;
        };
        let before = list.len();
        list.retain(|registered| registered.id != subscription.id);
        let removed = list.len() < before;
        if list.is_empty() {
            guard.remove(&subscription.target);
        }
        removed
    }

    /// Drop every handler registered for `target`.
    pub fn off(&self, target: &CheetahString) {
        self.handlers.write().remove(target);
    }

    pub fn handler_count(&self, target: &CheetahString) -> usize {
        self.handlers.read().get(target).map_or(0, Vec::len)
    }

    /// Invoke every handler registered for `target`, in registration order.
    ///
    /// Returns the number of handlers invoked; zero means nothing was
    /// registered for the target. A failing handler does not stop the sweep:
    /// every failure is logged, the remaining handlers still run, and the
    /// first failure is returned once the sweep completes.
    pub fn dispatch(&self, target: &CheetahString, args: &[Value]) -> HubResult<usize> {
        // Snapshot so handlers may register or unregister during dispatch.
        let snapshot: Vec<Arc<InvocationHandler>> = {
            let guard = self.handlers.read();
            match guard.get(target) {
                Some(list) => list.iter().map(|registered| Arc::clone(&registered.handler)).collect(),
                None => return Ok(0),
            }
        };

        let invoked = snapshot.len();
        let mut first_error = None;
        for handler in snapshot {
            if let Err(e) = handler.invoke(args) {
                error!("Handler for target '{}' failed: {}", target, e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(invoked),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use hublink_error::HubError;
    use serde_json::json;

    use super::*;

    fn target(name: &'static str) -> CheetahString {
        CheetahString::from_static_str(name)
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let registry = HandlerRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let sink = Arc::clone(&seen);
            registry.on1("ReceiveMessage", move |message: String| {
                sink.lock().unwrap().push(format!("{tag}:{message}"));
            });
        }

        let invoked = registry.dispatch(&target("ReceiveMessage"), &[json!("hi")]).unwrap();
        assert_eq!(invoked, 3);
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["first:hi".to_string(), "second:hi".to_string(), "third:hi".to_string()]
        );
    }

    #[test]
    fn dispatch_without_handlers_invokes_nothing() {
        let registry = HandlerRegistry::new();
        assert_eq!(registry.dispatch(&target("Nothing"), &[]).unwrap(), 0);
    }

    #[test]
    fn remove_unregisters_exactly_one_handler() {
        let registry = HandlerRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let first = registry.on0("Ping", move || sink.lock().unwrap().push("first"));
        let sink = Arc::clone(&seen);
        let _second = registry.on0("Ping", move || sink.lock().unwrap().push("second"));

        assert!(registry.remove(&first));
        assert!(!registry.remove(&first), "second removal must be a no-op");
        assert_eq!(registry.handler_count(&target("Ping")), 1);

        registry.dispatch(&target("Ping"), &[]).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["second"]);
    }

    #[test]
    fn off_drops_every_handler_for_a_target() {
        let registry = HandlerRegistry::new();
        registry.on0("Ping", || {});
        registry.on0("Ping", || {});
        registry.on0("Pong", || {});

        registry.off(&target("Ping"));
        assert_eq!(registry.handler_count(&target("Ping")), 0);
        assert_eq!(registry.handler_count(&target("Pong")), 1);
    }

    #[test]
    fn failing_handler_does_not_stop_the_sweep() {
        let registry = HandlerRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        // Registered for two arguments, so a one-argument invocation fails it.
        registry.on2("Mixed", |_a: String, _b: String| {});
        let sink = Arc::clone(&seen);
        registry.on1("Mixed", move |message: String| {
            sink.lock().unwrap().push(message);
        });

        let err = registry.dispatch(&target("Mixed"), &[json!("still delivered")]).unwrap_err();
        assert!(matches!(err, HubError::ArgumentCountMismatch { expected: 2, actual: 1, .. }));
        assert_eq!(*seen.lock().unwrap(), vec!["still delivered".to_string()]);
    }

    #[test]
    fn five_argument_registration_dispatches_typed_values() {
        let registry = HandlerRegistry::new();
        let sum = Arc::new(Mutex::new(0));

        let sink = Arc::clone(&sum);
        registry.on5("Accumulate", move |a: i32, b: i32, c: i32, d: i32, e: i32| {
            *sink.lock().unwrap() = a + b + c + d + e;
        });

        registry
            .dispatch(&target("Accumulate"), &[json!(1), json!(2), json!(3), json!(4), json!(5)])
            .unwrap();
        assert_eq!(*sum.lock().unwrap(), 15);
    }
}
