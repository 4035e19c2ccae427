//! WebSocket event vocabulary: client events in, server events out.
//!
//! Events are a closed tagged-variant set, decoded once at the
//! connection boundary. Session descriptions (SDP) are carried as
//! opaque JSON — the relay forwards them without interpreting their
//! contents.

use serde::{Deserialize, Serialize};

use crate::domain::{ConnId, UserId};

/// Chat message body: plain text or a reference to an already-uploaded
/// image. Upload and storage are the CRUD layer's job; the relay only
/// forwards the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChatBody {
    /// Plain text message.
    Text {
        /// Message text.
        text: String,
    },
    /// Reference to a stored image.
    Image {
        /// URL of the uploaded image.
        url: String,
    },
}

/// Events a client may send to the relay.
///
/// Every variant names its target explicitly — the relay has no notion
/// of a conversation or room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Chat message for another user.
    ChatMessage {
        /// Target user.
        to: UserId,
        /// Message body.
        body: ChatBody,
    },
    /// Typing indicator for another user.
    Typing {
        /// Target user.
        to: UserId,
        /// Whether the sender is currently typing.
        typing: bool,
    },
    /// WebRTC call offer for another user.
    CallOffer {
        /// Target user (the callee).
        to: UserId,
        /// Opaque session description.
        sdp: serde_json::Value,
    },
    /// WebRTC call answer, addressed to the exact caller connection
    /// captured from the incoming-call event — not to a user. Pinning
    /// the connection keeps the answer on the caller session that sent
    /// the offer even if the caller has since re-attached.
    CallAnswer {
        /// The caller's connection, as tagged on the incoming call.
        caller_conn: ConnId,
        /// Opaque session description.
        sdp: serde_json::Value,
    },
}

/// Events the relay sends to a client. This is the complete outbound
/// vocabulary — routing misses produce no event at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Chat message from another user.
    ChatMessage {
        /// Sending user.
        from: UserId,
        /// Message body, unchanged from the sender's payload.
        body: ChatBody,
    },
    /// Typing indicator from another user.
    Typing {
        /// Sending user.
        from: UserId,
        /// Whether the sender is currently typing.
        typing: bool,
    },
    /// Incoming WebRTC call. Carries the caller's connection identity
    /// so the answer can be routed back without a second presence
    /// lookup.
    IncomingCall {
        /// Calling user.
        from: UserId,
        /// The caller's connection, to be echoed back in the answer.
        caller_conn: ConnId,
        /// Opaque session description.
        sdp: serde_json::Value,
    },
    /// Answer to a call this connection offered.
    CallAnswered {
        /// Answering user.
        from: UserId,
        /// Opaque session description.
        sdp: serde_json::Value,
    },
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn decode(json: &str) -> ClientEvent {
        serde_json::from_str(json).ok().unwrap_or_else(|| {
            panic!("decode failed for {json}");
        })
    }

    #[test]
    fn decodes_text_chat_message() {
        let event = decode(
            r#"{"type":"chat_message","to":"bob","body":{"kind":"text","text":"gg wp"}}"#,
        );
        let ClientEvent::ChatMessage { to, body } = event else {
            panic!("wrong variant");
        };
        assert_eq!(to, UserId::new("bob"));
        assert_eq!(
            body,
            ChatBody::Text {
                text: "gg wp".to_string()
            }
        );
    }

    #[test]
    fn decodes_image_chat_message() {
        let event = decode(
            r#"{"type":"chat_message","to":"bob","body":{"kind":"image","url":"/uploads/clip.png"}}"#,
        );
        let ClientEvent::ChatMessage { body, .. } = event else {
            panic!("wrong variant");
        };
        assert_eq!(
            body,
            ChatBody::Image {
                url: "/uploads/clip.png".to_string()
            }
        );
    }

    #[test]
    fn decodes_typing() {
        let event = decode(r#"{"type":"typing","to":"bob","typing":true}"#);
        let ClientEvent::Typing { to, typing } = event else {
            panic!("wrong variant");
        };
        assert_eq!(to, UserId::new("bob"));
        assert!(typing);
    }

    #[test]
    fn decodes_call_offer_with_opaque_sdp() {
        let event = decode(
            r#"{"type":"call_offer","to":"bob","sdp":{"type":"offer","sdp":"v=0..."}}"#,
        );
        let ClientEvent::CallOffer { to, sdp } = event else {
            panic!("wrong variant");
        };
        assert_eq!(to, UserId::new("bob"));
        assert_eq!(sdp["type"], "offer");
    }

    #[test]
    fn decodes_call_answer_by_conn_id() {
        let conn = ConnId::new();
        let json = format!(
            r#"{{"type":"call_answer","caller_conn":"{conn}","sdp":{{"type":"answer"}}}}"#
        );
        let event = decode(&json);
        let ClientEvent::CallAnswer { caller_conn, .. } = event else {
            panic!("wrong variant");
        };
        assert_eq!(caller_conn, conn);
    }

    #[test]
    fn rejects_unknown_event_type() {
        let result: Result<ClientEvent, _> =
            serde_json::from_str(r#"{"type":"teleport","to":"bob"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn incoming_call_serializes_tag_and_conn() {
        let conn = ConnId::new();
        let event = ServerEvent::IncomingCall {
            from: UserId::new("alice"),
            caller_conn: conn,
            sdp: serde_json::json!({"type": "offer"}),
        };
        let json = serde_json::to_value(&event).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json["type"], "incoming_call");
        assert_eq!(json["from"], "alice");
        assert_eq!(json["caller_conn"], conn.to_string());
    }
}
