//! Guided STAR composition — four labeled inputs folded into one sentence.
//! Purely mechanical; the LLM-backed variant lives in `polish::star_rewrite`.

use serde::Deserialize;

/// The four answers collected by the step-by-step STAR guide.
#[derive(Debug, Clone, Deserialize)]
pub struct StarGuide {
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
}

/// Folds the guide answers into the fixed sentence template.
pub fn compose_star(guide: &StarGuide) -> String {
    format!(
        "在{}背景下，针对{}难题，采用{}，最终{}。",
        guide.situation, guide.task, guide.action, guide.result
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_star_uses_the_fixed_template() {
        let guide = StarGuide {
            situation: "高并发电商系统的秒杀模块开发".to_string(),
            task: "库存超卖".to_string(),
            action: "Redis Lua脚本保证原子性".to_string(),
            result: "彻底解决超卖问题".to_string(),
        };
        assert_eq!(
            compose_star(&guide),
            "在高并发电商系统的秒杀模块开发背景下，针对库存超卖难题，采用Redis Lua脚本保证原子性，最终彻底解决超卖问题。"
        );
    }

    #[test]
    fn test_compose_star_with_empty_answers_keeps_the_frame() {
        let guide = StarGuide {
            situation: String::new(),
            task: String::new(),
            action: String::new(),
            result: String::new(),
        };
        assert_eq!(compose_star(&guide), "在背景下，针对难题，采用，最终。");
    }
}
