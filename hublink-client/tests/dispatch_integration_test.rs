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

//! End-to-end test: wire payload -> InvocationMessage -> registry -> typed callback

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use hublink_client::DispatchServiceConfig;
use hublink_client::HandlerRegistry;
use hublink_client::InvocationDispatchService;
use hublink_client::InvocationMessage;

#[tokio::test]
async fn wire_payload_reaches_typed_five_argument_handler() {
    let registry = Arc::new(HandlerRegistry::new());
    let received = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&received);
    let subscription = registry.on5(
        "OrderPlaced",
        move |order_id: String, customer: String, quantity: u32, unit_price: f64, express: bool| {
            sink.lock()
                .unwrap()
                .push(format!("{order_id}/{customer}/{quantity}/{unit_price}/{express}"));
        },
    );

    let mut service = InvocationDispatchService::new(Arc::clone(&registry), DispatchServiceConfig::default());
    service.start();

    let payload =
        br#"{"target":"OrderPlaced","arguments":["o-17","alice",3,9.5,true],"invocationId":"7"}"#;
    let message = InvocationMessage::decode(payload).unwrap();
    assert_eq!(message.invocation_id.as_deref(), Some("7"));
    service.submit(message).await;

    for _ in 0..200 {
        if !received.lock().unwrap().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(*received.lock().unwrap(), vec!["o-17/alice/3/9.5/true".to_string()]);

    // After unsubscribing, the same invocation no longer reaches the callback.
    assert!(registry.remove(&subscription));
    service
        .submit(InvocationMessage::decode(payload).unwrap())
        .await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(received.lock().unwrap().len(), 1);
}
