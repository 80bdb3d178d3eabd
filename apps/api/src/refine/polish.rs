//! Bullet refinement backed by the LLM client.
//!
//! Contract: these functions NEVER fail. On a missing client, an API error,
//! or empty model output they hand back the caller's original input, so the
//! returned value is always safe to write into the document.

use tracing::{debug, warn};

use crate::llm_client::LlmClient;
use crate::refine::prompts::{
    POLISH_PROMPT_TEMPLATE, POLISH_SYSTEM, STAR_REWRITE_PROMPT_TEMPLATE, STAR_REWRITE_SYSTEM,
    TECH_STACK_PROMPT_TEMPLATE, TECH_STACK_SYSTEM,
};

/// Polishes free text into a tighter, more professional phrasing.
pub async fn polish(llm: Option<&LlmClient>, text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    let Some(client) = llm else {
        debug!("polish skipped: no LLM client configured");
        return text.to_string();
    };

    let prompt = POLISH_PROMPT_TEMPLATE.replace("{content}", text);
    rewrite_or_fallback(client, &prompt, POLISH_SYSTEM, text).await
}

/// Rewrites a bullet with the STAR method, using the author's role as context.
pub async fn star_rewrite(llm: Option<&LlmClient>, role: &str, content: &str) -> String {
    if content.trim().is_empty() {
        return content.to_string();
    }
    let Some(client) = llm else {
        debug!("star rewrite skipped: no LLM client configured");
        return content.to_string();
    };

    let prompt = STAR_REWRITE_PROMPT_TEMPLATE
        .replace("{role}", role)
        .replace("{content}", content);
    rewrite_or_fallback(client, &prompt, STAR_REWRITE_SYSTEM, content).await
}

/// Extracts tech-stack keywords from a project description.
/// Degrades to an empty list instead of failing.
pub async fn suggest_tech_stack(llm: Option<&LlmClient>, description: &str) -> Vec<String> {
    let Some(client) = llm else {
        debug!("tech-stack extraction skipped: no LLM client configured");
        return Vec::new();
    };

    let prompt = TECH_STACK_PROMPT_TEMPLATE.replace("{description}", description);
    match client
        .call_json::<Vec<String>>(&prompt, TECH_STACK_SYSTEM)
        .await
    {
        Ok(items) => items,
        Err(e) => {
            warn!("tech-stack extraction failed: {e}");
            Vec::new()
        }
    }
}

async fn rewrite_or_fallback(
    client: &LlmClient,
    prompt: &str,
    system: &str,
    original: &str,
) -> String {
    match client.call(prompt, system).await {
        Ok(response) => response
            .text()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| original.to_string()),
        Err(e) => {
            warn!("rewrite failed, keeping original text: {e}");
            original.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_polish_without_client_returns_the_input() {
        let text = "优化支付回调逻辑，提升吞吐量。";
        assert_eq!(polish(None, text).await, text);
    }

    #[tokio::test]
    async fn test_polish_keeps_empty_input_untouched() {
        assert_eq!(polish(None, "").await, "");
    }

    #[tokio::test]
    async fn test_star_rewrite_without_client_returns_the_input() {
        let content = "负责订单模块。";
        assert_eq!(star_rewrite(None, "后端实习生", content).await, content);
    }

    #[tokio::test]
    async fn test_tech_stack_without_client_returns_empty() {
        assert!(suggest_tech_stack(None, "一个高并发电商平台").await.is_empty());
    }
}
