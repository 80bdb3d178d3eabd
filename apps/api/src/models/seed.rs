//! Default template seed — the sample Java-backend résumé every new session
//! starts from. Entry ids are freshly generated per call, so two seeded
//! documents never share ids.

use uuid::Uuid;

use crate::models::document::{
    Document, Education, Internship, PersonalInfo, Project, SectionOrder, SkillGroup,
};

pub fn seed_document() -> Document {
    Document {
        personal_info: PersonalInfo {
            name: "张工科".to_string(),
            job_intention: "Java后端开发工程师".to_string(),
            phone: "138-xxxx-xxxx".to_string(),
            email: "zhang.gongke@example.com".to_string(),
            location: "北京".to_string(),
            photo_url: Some("https://picsum.photos/300/400".to_string()),
            github: Some("github.com/zhanggongke".to_string()),
            blog: Some("juejin.cn/user/zhanggongke".to_string()),
        },
        section_order: SectionOrder::default(),
        education: vec![
            Education {
                id: Uuid::new_v4(),
                school: "XXX大学 (985/211)".to_string(),
                degree: "计算机科学与技术 硕士".to_string(),
                college: "计算机学院".to_string(),
                start_date: "2022-09".to_string(),
                end_date: "2025-06".to_string(),
                gpa: Some("GPA 3.8/4.0 (专业前3%)".to_string()),
                honors: Some("国家奖学金、蓝桥杯国赛一等奖、英语六级(600)".to_string()),
                courses: None,
            },
            Education {
                id: Uuid::new_v4(),
                school: "XXX大学 (211)".to_string(),
                degree: "计算机科学与技术 本科".to_string(),
                college: "计算机学院".to_string(),
                start_date: "2018-09".to_string(),
                end_date: "2022-06".to_string(),
                gpa: None,
                honors: None,
                courses: None,
            },
        ],
        internships: vec![Internship {
            id: Uuid::new_v4(),
            company: "腾讯".to_string(),
            role: "后台开发实习生".to_string(),
            start_date: "2025-03".to_string(),
            end_date: "2025-05".to_string(),
            summary: Some(
                "参与微信支付核心链路优化，负责高并发场景下的订单处理模块。".to_string(),
            ),
            details: vec![
                "优化支付回调逻辑，引入消息队列削峰填谷，将系统吞吐量提升20%。".to_string(),
                "排查线上FullGC问题，通过优化JVM参数及大对象分配，将GC频率降低50%。".to_string(),
                "编写自动化测试脚本，覆盖率提升至85%，减少回归测试时间。".to_string(),
            ],
        }],
        projects: vec![Project {
            id: Uuid::new_v4(),
            name: "雅鉴生活志 (高并发电商平台)".to_string(),
            role: Some("后端核心开发".to_string()),
            link: Some("github.com/zhanggongke/yajian".to_string()),
            start_date: "2024-10".to_string(),
            end_date: "2025-02".to_string(),
            summary: "为用户提供商家查询、秒杀优惠券、智能客服功能的综合生活服务平台。"
                .to_string(),
            tech_stack: "SpringBoot, MySQL, Redis, Lua, Kafka, Caffeine, LangChain4j".to_string(),
            details: vec![
                "秒杀防超卖：使用Redis+Lua脚本实现库存预扣减，结合一人一单策略，彻底解决超卖问题。"
                    .to_string(),
                "异步削峰：引入Kafka消息队列将同步下单流程改造为异步处理，系统并发能力提升5倍。"
                    .to_string(),
                "多级缓存架构：搭建Caffeine本地缓存+Redis分布式缓存的二级架构，热点数据响应时间降低至5ms以内。"
                    .to_string(),
                "智能客服：基于LangChain4j接入大模型，利用Redis实现会话记忆，支持自然语言查询商家信息及预约。"
                    .to_string(),
            ],
        }],
        skills: vec![
            SkillGroup {
                category: "Java基础".to_string(),
                items: vec![
                    "熟悉面向对象、集合框架(HashMap/ArrayList源码)、反射、泛型、异常处理机制"
                        .to_string(),
                ],
            },
            SkillGroup {
                category: "并发编程".to_string(),
                items: vec![
                    "深入理解JMM内存模型、线程池、Synchronized、ReentrantLock、AQS原理、ConcurrentHashMap"
                        .to_string(),
                ],
            },
            SkillGroup {
                category: "JVM".to_string(),
                items: vec![
                    "熟悉内存结构、垃圾回收算法(CMS/G1)、双亲委派机制、类加载过程、常见OOM分析"
                        .to_string(),
                ],
            },
            SkillGroup {
                category: "数据库".to_string(),
                items: vec![
                    "精通MySQL事务、索引优化、MVCC、锁机制；熟悉Redis数据结构、持久化、分布式锁、缓存击穿/穿透/雪崩解决方案"
                        .to_string(),
                ],
            },
            SkillGroup {
                category: "框架与中间件".to_string(),
                items: vec![
                    "熟练掌握Spring Boot/Cloud、MyBatis Plus；熟悉Kafka消息可靠性投递、积压处理；了解SpringAI"
                        .to_string(),
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_passes_validation() {
        assert!(seed_document().validate().is_ok());
    }

    #[test]
    fn test_seed_ids_are_unique_per_call() {
        let a = seed_document();
        let b = seed_document();
        let ids_a: HashSet<Uuid> = a.education.iter().map(|e| e.id).collect();
        let ids_b: HashSet<Uuid> = b.education.iter().map(|e| e.id).collect();
        assert!(ids_a.is_disjoint(&ids_b));
    }

    #[test]
    fn test_seed_has_populated_sections() {
        let doc = seed_document();
        assert_eq!(doc.education.len(), 2);
        assert_eq!(doc.internships.len(), 1);
        assert_eq!(doc.projects.len(), 1);
        assert_eq!(doc.skills.len(), 5);
        assert_eq!(doc.internships[0].details.len(), 3);
    }
}
