//! Display text for both site languages.

use crate::portfolio::{Category, Project};
use crate::state::Language;

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Strings {
    pub nav_home: &'static str,
    pub nav_process: &'static str,
    pub nav_features: &'static str,
    pub nav_portfolio: &'static str,
    pub nav_contact: &'static str,
    pub start_project: &'static str,

    pub hero_subtitle: &'static str,
    pub hero_description: &'static str,
    pub hero_text: &'static str,
    pub see_speed: &'static str,

    pub process_title: &'static str,
    pub traditional: &'static str,
    pub accelerated: &'static str,
    pub process_description: &'static str,
    pub traditional_duration: &'static str,
    pub accelerated_duration: &'static str,

    pub features_title: &'static str,
    pub features_subtitle: &'static str,
    pub features: &'static [Feature],

    pub portfolio_title: &'static str,
    /// Labels in `PortfolioFilter::ALL` order.
    pub filters: [&'static str; 4],
    pub projects: &'static [Project],

    pub contact_title: &'static str,
    pub contact_subtitle: &'static str,
    pub contact_description: &'static str,
    pub contact_location: &'static str,
    /// Labels in `ContactField::ALL` order.
    pub form_labels: [&'static str; 4],
    pub form_submit: &'static str,

    pub footer_tagline: &'static str,
    pub built_with: &'static str,
}

/// Stage names are shown untranslated in both languages.
pub const TRADITIONAL_STEPS: &[&str] = &["Planning", "Design", "Development", "Testing", "Deployment"];
pub const ACCELERATED_STEPS: &[&str] = &["AI Planning", "Auto Design", "Smart Dev", "Auto Test", "Instant Deploy"];

pub const CONTACT_EMAIL: &str = "hello@cskit.co.kr";
pub const CONTACT_PHONE: &str = "+82 10-1234-5678";

static EN: Strings = Strings {
    nav_home: "Home",
    nav_process: "vibecoding",
    nav_features: "Features",
    nav_portfolio: "Portfolio",
    nav_contact: "Contact",
    start_project: "Start Project",

    hero_subtitle: "vibecoding",
    hero_description: "The Future of Web Development",
    hero_text: "Build your dream website up to 5x faster with our AI-powered development process. Experience the speed of vibecoding.",
    see_speed: "See Our Speed",

    process_title: "What is vibecoding?",
    traditional: "Traditional Development",
    accelerated: "vibecoding Process",
    process_description: "Our developers harness vibecoding, an AI-enhanced framework, to bypass traditional bottlenecks and deliver superior quality faster.",
    traditional_duration: "4-8 weeks",
    accelerated_duration: "1-2 weeks",

    features_title: "Why Choose CSKIT?",
    features_subtitle: "Experience the future of web development",
    features: &[
        Feature {
            title: "Lightning Speed",
            description: "5x faster development with AI-powered automation and smart code generation.",
        },
        Feature {
            title: "Modern Design",
            description: "Cutting-edge aesthetics powered by AI design systems and trend analysis.",
        },
        Feature {
            title: "Bilingual Support",
            description: "Seamless English and Korean support for global and local markets.",
        },
        Feature {
            title: "AI-Powered",
            description: "Advanced AI integration for intelligent development and optimization.",
        },
    ],

    portfolio_title: "Our Work",
    filters: ["All", "E-commerce", "Corporate", "Startup"],
    projects: &[
        Project {
            category: Category::Ecommerce,
            title: "Modern E-commerce Platform",
            description: "Built with vibecoding in 3 days",
        },
        Project {
            category: Category::Corporate,
            title: "Enterprise Dashboard",
            description: "AI-powered analytics interface",
        },
        Project {
            category: Category::Startup,
            title: "Startup Landing Page",
            description: "Converted 40% more visitors",
        },
        Project {
            category: Category::Ecommerce,
            title: "Mobile Commerce App",
            description: "Cross-platform with vibecoding",
        },
    ],

    contact_title: "Start Your Project",
    contact_subtitle: "Ready to experience vibecoding?",
    contact_description: "Get in touch and let's build something amazing together.",
    contact_location: "Seoul, South Korea",
    form_labels: ["Your Name", "Email Address", "Project Type", "Tell us about your project"],
    form_submit: "Send Message",

    footer_tagline: "Next-Level Speed & Modern Design Powered by vibecoding",
    built_with: "Built with vibecoding",
};

static KO: Strings = Strings {
    nav_home: "홈",
    nav_process: "바이브코딩",
    nav_features: "특징",
    nav_portfolio: "포트폴리오",
    nav_contact: "연락처",
    start_project: "프로젝트 시작",

    hero_subtitle: "바이브코딩",
    hero_description: "웹 개발의 미래",
    hero_text: "AI 기반 개발 프로세스로 꿈의 웹사이트를 최대 5배 빠르게 구축하세요. 바이브코딩의 속도를 경험해보세요.",
    see_speed: "속도 확인하기",

    process_title: "바이브코딩이란?",
    traditional: "전통적인 개발",
    accelerated: "바이브코딩 프로세스",
    process_description: "저희 개발자들은 전통적인 병목 현상을 우회하여 더 빠르고 우수한 품질을 제공하는 AI 강화 프레임워크인 바이브코딩을 활용합니다.",
    traditional_duration: "4-8주",
    accelerated_duration: "1-2주",

    features_title: "CSKIT을 선택하는 이유는?",
    features_subtitle: "웹 개발의 미래를 경험하세요",
    features: &[
        Feature {
            title: "번개 같은 속도",
            description: "AI 기반 자동화와 스마트 코드 생성으로 5배 빠른 개발",
        },
        Feature {
            title: "모던 디자인",
            description: "AI 디자인 시스템과 트렌드 분석으로 구현된 최첨단 미학",
        },
        Feature {
            title: "이중 언어 지원",
            description: "글로벌 및 로컬 시장을 위한 원활한 영어 및 한국어 지원",
        },
        Feature {
            title: "AI 기반",
            description: "지능형 개발 및 최적화를 위한 고급 AI 통합",
        },
    ],

    portfolio_title: "저희 작업",
    filters: ["전체", "이커머스", "기업", "스타트업"],
    projects: &[
        Project {
            category: Category::Ecommerce,
            title: "모던 이커머스 플랫폼",
            description: "바이브코딩으로 3일 만에 구축",
        },
        Project {
            category: Category::Corporate,
            title: "기업 대시보드",
            description: "AI 기반 분석 인터페이스",
        },
        Project {
            category: Category::Startup,
            title: "스타트업 랜딩 페이지",
            description: "40% 더 많은 방문자 전환",
        },
        Project {
            category: Category::Ecommerce,
            title: "모바일 커머스 앱",
            description: "바이브코딩으로 크로스 플랫폼",
        },
    ],

    contact_title: "프로젝트 시작하기",
    contact_subtitle: "바이브코딩을 경험할 준비가 되셨나요?",
    contact_description: "연락주시고 함께 놀라운 것을 만들어봅시다.",
    contact_location: "서울, 대한민국",
    form_labels: ["이름", "이메일 주소", "프로젝트 유형", "프로젝트에 대해 알려주세요"],
    form_submit: "메시지 보내기",

    footer_tagline: "바이브코딩으로 구동되는 차세대 속도와 모던 디자인",
    built_with: "바이브코딩으로 구축",
};

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Ko => &KO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_have_matching_lists() {
        let (en, ko) = (strings(Language::En), strings(Language::Ko));
        assert_eq!(en.features.len(), ko.features.len());
        assert_eq!(en.projects.len(), ko.projects.len());
        assert_ne!(en.nav_home, ko.nav_home);
    }

    #[test]
    fn test_form_labels_are_translated() {
        let (en, ko) = (strings(Language::En), strings(Language::Ko));
        assert_eq!(en.form_labels[0], "Your Name");
        assert_eq!(ko.form_submit, "메시지 보내기");
        for (a, b) in en.form_labels.iter().zip(ko.form_labels.iter()) {
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_step_lists_match_cycle_length() {
        let steps = crate::config::SiteConfig::default().step_count;
        assert_eq!(TRADITIONAL_STEPS.len(), steps);
        assert_eq!(ACCELERATED_STEPS.len(), steps);
    }
}
