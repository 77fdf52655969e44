use serde::Serialize;

use crate::api::models::{MessageContent, MessageList, MessageRole};

/// Flattened view of one text block of a message. The serialized field
/// names are part of the output contract, `createdAt` and `threadID`
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedMessage {
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    pub id: String,
    pub role: MessageRole,
    #[serde(rename = "threadID")]
    pub thread_id: String,
    pub value: String,
}

/// Flattens a message page into one entry per text block, preserving the
/// page order. A message with several text blocks yields several entries;
/// blocks without a textual payload are skipped.
pub fn process_messages(messages: &MessageList) -> Vec<ProcessedMessage> {
    let mut processed = Vec::new();
    for message in &messages.data {
        for content in &message.content {
            let MessageContent::Text { text } = content else {
                continue;
            };
            processed.push(ProcessedMessage {
                created_at: message.created_at,
                id: message.id.clone(),
                role: message.role,
                thread_id: message.thread_id.clone(),
                value: text.value.clone(),
            });
        }
    }
    processed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Message, MessageText};
    use serde_json::json;

    fn text_block(value: &str) -> MessageContent {
        MessageContent::Text {
            text: MessageText {
                value: value.to_string(),
                annotations: Vec::new(),
            },
        }
    }

    fn message(id: &str, role: MessageRole, content: Vec<MessageContent>) -> Message {
        Message {
            id: id.to_string(),
            object: "thread.message".to_string(),
            created_at: 1700000000,
            thread_id: "thread_1".to_string(),
            role,
            content,
            assistant_id: None,
            run_id: None,
            metadata: None,
        }
    }

    fn page(data: Vec<Message>) -> MessageList {
        MessageList {
            object: "list".to_string(),
            data,
            first_id: None,
            last_id: None,
            has_more: false,
        }
    }

    #[test]
    fn preserves_page_order() {
        let list = page(vec![
            message("msg_1", MessageRole::User, vec![text_block("question")]),
            message("msg_2", MessageRole::Assistant, vec![text_block("answer")]),
        ]);

        let processed = process_messages(&list);
        assert_eq!(processed.len(), 2);
        assert_eq!(processed[0].id, "msg_1");
        assert_eq!(processed[0].value, "question");
        assert_eq!(processed[1].id, "msg_2");
        assert_eq!(processed[1].value, "answer");
    }

    #[test]
    fn expands_multi_block_messages_and_skips_non_text() {
        let list = page(vec![message(
            "msg_1",
            MessageRole::Assistant,
            vec![
                text_block("part one"),
                MessageContent::ImageFile {
                    image_file: crate::api::models::ImageFile {
                        file_id: "file_1".to_string(),
                    },
                },
                text_block("part two"),
                MessageContent::Unknown,
            ],
        )]);

        let processed = process_messages(&list);
        assert_eq!(processed.len(), 2);
        assert_eq!(processed[0].value, "part one");
        assert_eq!(processed[1].value, "part two");
        assert!(processed.iter().all(|entry| entry.id == "msg_1"));
    }

    #[test]
    fn empty_page_yields_empty_vec() {
        assert!(process_messages(&page(Vec::new())).is_empty());
    }

    #[test]
    fn serializes_with_contract_field_names() {
        let list = page(vec![message("msg_1", MessageRole::User, vec![text_block("hi")])]);
        let processed = process_messages(&list);

        let value = serde_json::to_value(&processed[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "createdAt": 1700000000,
                "id": "msg_1",
                "role": "user",
                "threadID": "thread_1",
                "value": "hi"
            })
        );
    }
}
