use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::LLMService;

/// Scripted provider for tests. Replies are handed out in order; a single
/// scripted reply repeats on every call.
pub struct FakeLLMService {
    replies: Mutex<Vec<Result<String, String>>>,
    call_count: Mutex<usize>,
}

impl FakeLLMService {
    pub fn new(replies: Vec<Result<String, String>>) -> Self {
        Self {
            replies: Mutex::new(replies),
            call_count: Mutex::new(0),
        }
    }

    pub fn always_text(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn always_error(message: &str) -> Self {
        Self::new(vec![Err(message.to_string())])
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl LLMService for FakeLLMService {
    async fn generate_text(&self, _prompt: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(anyhow!("no scripted reply left"));
        }

        let reply = if replies.len() == 1 {
            replies[0].clone()
        } else {
            replies.remove(0)
        };

        reply.map_err(|message| anyhow!(message))
    }
}
