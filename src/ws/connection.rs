//! WebSocket connection state machine.
//!
//! One task per connection: Connecting (before registration) →
//! Attached (steady state, events flow) → Detached (terminal). Inbound
//! events are decoded once and dispatched synchronously in arrival
//! order, so events from one sender reach a given target in the order
//! they were sent.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use futures_util::stream::SplitStream;

use super::messages::{ClientEvent, ServerEvent};
use crate::app_state::AppState;
use crate::domain::{ConnId, UserId};

/// Runs the read/write loop for a single WebSocket connection.
///
/// With `user` present the connection is attached: registered in the
/// presence registry and given a switchboard route. With `user` absent
/// (malformed handshake) the socket stays open but unattached — never
/// registered, never routable, inbound frames discarded.
///
/// Exactly one detach runs when the loop exits, whichever side closed.
pub async fn run_connection(socket: WebSocket, state: AppState, user: Option<UserId>) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    let Some(user) = user else {
        drain_unattached(&mut ws_rx).await;
        return;
    };

    let conn = ConnId::new();
    let mut outbound = state.switchboard.open(conn).await;
    state.registry.attach(user.clone(), conn).await;
    tracing::info!(user = %user, conn = %conn, "connection attached");

    loop {
        tokio::select! {
            // Incoming event from this client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<ClientEvent>(&text) {
                            Ok(event) => dispatch(&state, &user, conn, event).await,
                            Err(err) => {
                                // Outbound vocabulary is closed; no error frame.
                                tracing::debug!(user = %user, %err, "ignoring undecodable frame");
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    _ => {}
                }
            }
            // Event routed to this client by a peer's task
            event = outbound.recv() => {
                match event {
                    Some(event) => {
                        let json = serde_json::to_string(&event).unwrap_or_default();
                        if ws_tx.send(Message::text(json)).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    state.registry.detach(conn).await;
    state.switchboard.close(conn).await;
    tracing::info!(user = %user, conn = %conn, "connection detached");
}

/// Dispatches one decoded client event to its target.
///
/// All routing misses are silent drops: "peer offline" is a normal
/// state, never reported back to the sender.
async fn dispatch(state: &AppState, sender: &UserId, sender_conn: ConnId, event: ClientEvent) {
    match event {
        ClientEvent::ChatMessage { to, body } => {
            // Persistence is the CRUD layer's job, out-of-band; the
            // relay only handles live delivery.
            forward_to_user(
                state,
                &to,
                ServerEvent::ChatMessage {
                    from: sender.clone(),
                    body,
                },
            )
            .await;
        }
        ClientEvent::Typing { to, typing } => {
            forward_to_user(
                state,
                &to,
                ServerEvent::Typing {
                    from: sender.clone(),
                    typing,
                },
            )
            .await;
        }
        ClientEvent::CallOffer { to, sdp } => {
            // Tagged with the caller's connection so the answer routes
            // back to this exact session without a second lookup.
            forward_to_user(
                state,
                &to,
                ServerEvent::IncomingCall {
                    from: sender.clone(),
                    caller_conn: sender_conn,
                    sdp,
                },
            )
            .await;
        }
        ClientEvent::CallAnswer { caller_conn, sdp } => {
            // Pinned connection identity, bypassing the registry: the
            // caller may have re-attached since the offer, and the
            // answer must not chase a fresh resolve.
            state
                .switchboard
                .deliver(
                    caller_conn,
                    ServerEvent::CallAnswered {
                        from: sender.clone(),
                        sdp,
                    },
                )
                .await;
        }
    }
}

/// Resolves `to` in the presence registry and queues `event` on the
/// target's connection. Silent drop if the target is offline.
async fn forward_to_user(state: &AppState, to: &UserId, event: ServerEvent) {
    let Some(target) = state.registry.resolve(to).await else {
        tracing::debug!(target = %to, "routing miss, target offline");
        return;
    };
    state.switchboard.deliver(target, event).await;
}

/// Reads and discards frames from an unattached connection until the
/// client closes it.
async fn drain_unattached(ws_rx: &mut SplitStream<WebSocket>) {
    while let Some(msg) = ws_rx.next().await {
        match msg {
            Ok(Message::Close(_)) | Err(_) => break,
            _ => {}
        }
    }
    tracing::debug!("unattached connection closed");
}
