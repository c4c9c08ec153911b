use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::notification::use_notifications;
use crate::config;
use crate::effects::{init_scroll_animations, parallax_transform, use_reveal_on_scroll, Pose};
use crate::strings;

const FLOATING_ICONS: [&str; 4] = ["📚", "⏰", "✅", "📝"];

#[derive(Properties, PartialEq)]
struct FloatingElementsProps {
    scroll_y: f64,
}

#[function_component(FloatingElements)]
fn floating_elements(props: &FloatingElementsProps) -> Html {
    html! {
        <div class="floating-elements">
            { for FLOATING_ICONS.iter().enumerate().map(|(i, icon)| html! {
                <div
                    class={classes!("floating-element", format!("element-{}", i + 1))}
                    style={format!("transform: {};", parallax_transform(props.scroll_y, i))}
                >
                    {*icon}
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PhoneMockupProps {
    pub pose: Pose,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PhoneMockup)]
pub fn phone_mockup(props: &PhoneMockupProps) -> Html {
    let pose = props.pose;
    let node = use_node_ref();
    let hovering = use_state(|| false);
    let transform = use_state(|| None::<String>);

    let onmouseenter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(true))
    };

    let onmouseleave = {
        let hovering = hovering.clone();
        let transform = transform.clone();
        Callback::from(move |_: MouseEvent| {
            hovering.set(false);
            transform.set(Some(pose.rest_transform()));
        })
    };

    let onmousemove = {
        let node = node.clone();
        let transform = transform.clone();
        let hovering = *hovering;
        Callback::from(move |e: MouseEvent| {
            if !hovering {
                return;
            }
            if let Some(el) = node.cast::<Element>() {
                let rect = el.get_bounding_client_rect();
                transform.set(Some(pose.tilt_transform(
                    f64::from(e.client_x()),
                    f64::from(e.client_y()),
                    (rect.left(), rect.top(), rect.width(), rect.height()),
                )));
            }
        })
    };

    let style = (*transform).as_ref().map(|t| format!("transform: {};", t));

    html! {
        <div
            ref={node}
            class={pose.class()}
            {style}
            {onmouseenter}
            {onmouseleave}
            {onmousemove}
        >
            <div class="phone-screen">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    fn label(self) -> &'static str {
        match self {
            Platform::Ios => "App Store",
            Platform::Android => "Google Play",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    fn notice(self) -> &'static str {
        match self {
            Platform::Ios => strings::DOWNLOAD_IOS,
            Platform::Android => strings::DOWNLOAD_ANDROID,
        }
    }
}

#[derive(Properties, PartialEq)]
struct DownloadButtonProps {
    platform: Platform,
}

#[function_component(DownloadButton)]
fn download_button(props: &DownloadButtonProps) -> Html {
    let platform = props.platform;
    let notifications = use_notifications();
    let pressed = use_state(|| false);

    let onclick = {
        let pressed = pressed.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            pressed.set(true);
            let pressed = pressed.clone();
            let timeout = Timeout::new(config::BUTTON_PRESS_MS, move || pressed.set(false));
            timeout.forget();

            match &notifications {
                Some(center) => {
                    center.info(platform.notice());
                }
                None => debug!("No notification center for download button"),
            }
        })
    };

    html! {
        <a
            href="#"
            class={classes!("download-btn", platform.class(), (*pressed).then(|| "pressed"))}
            {onclick}
        >
            <span class="download-label">{platform.label()}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card fade-in" data-aos="fade-up">
            <div class="feature-icon">{props.icon}</div>
            <h3>{props.title}</h3>
            <p>{props.body}</p>
        </div>
    }
}

const ASSIGNMENTS: [(&str, &str, &str); 3] = [
    ("운영체제", "프로세스 스케줄링 보고서", "D-1"),
    ("데이터베이스", "ER 다이어그램 설계", "D-3"),
    ("선형대수", "5장 연습문제", "D-6"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let (_, scroll_y) = use_window_scroll();
    use_reveal_on_scroll();

    use_mount(init_scroll_animations);

    html! {
        <div class="landing-page">
            <section id="home" class="hero">
                <FloatingElements {scroll_y} />
                <div class="hero-content">
                    <div class="hero-text" data-aos="fade-right">
                        <h1 class="hero-title">{"과제 마감, 이제 놓치지 마세요"}</h1>
                        <p class="hero-subtitle">
                            {"LearnUs의 과제와 강의 일정을 자동으로 모아 마감 전에 알려드립니다."}
                        </p>
                        <div class="hero-buttons">
                            <DownloadButton platform={Platform::Ios} />
                            <DownloadButton platform={Platform::Android} />
                        </div>
                    </div>
                    <PhoneMockup pose={Pose::Hero}>
                        <div class="app-header">
                            <div class="ai-icon">{"🤖"}</div>
                            <span>{"오늘의 과제"}</span>
                        </div>
                    </PhoneMockup>
                </div>
            </section>

            <section id="features" class="features">
                <h2 class="section-title">{"주요 기능"}</h2>
                <div class="features-grid">
                    <FeatureCard
                        icon="🔄"
                        title="자동 동기화"
                        body="학교 계정을 연결하면 과제와 강의가 주기적으로 갱신됩니다."
                    />
                    <FeatureCard
                        icon="🔔"
                        title="마감 알림"
                        body="마감이 다가오는 과제를 놓치지 않도록 미리 알려드립니다."
                    />
                    <FeatureCard
                        icon="📅"
                        title="시간표 연동"
                        body="강의 시간표와 과제 일정을 한눈에 확인할 수 있습니다."
                    />
                </div>
            </section>

            <section id="showcase" class="showcase">
                <h2 class="section-title">{"한눈에 보는 과제 현황"}</h2>
                <div class="showcase-content">
                    <div class="assignment-list">
                        { for ASSIGNMENTS.iter().enumerate().map(|(i, (course, title, due))| html! {
                            <div
                                class="assignment-item"
                                style={format!("animation-delay: {}s;", i as f64 * 0.1)}
                            >
                                <span class="assignment-course">{*course}</span>
                                <span class="assignment-title">{*title}</span>
                                <span class="assignment-due">{*due}</span>
                            </div>
                        }) }
                    </div>
                    <PhoneMockup pose={Pose::Showcase}>
                        <div class="app-header">
                            <span>{"이번 주 마감"}</span>
                        </div>
                    </PhoneMockup>
                </div>
                <div class="companies">
                    <div class="company-card fade-in">{"연세대학교"}</div>
                    <div class="company-card fade-in">{"LearnUs"}</div>
                </div>
            </section>

            <section id="download" class="download">
                <h2 class="section-title">{"지금 시작하세요"}</h2>
                <div class="download-buttons">
                    <DownloadButton platform={Platform::Ios} />
                    <DownloadButton platform={Platform::Android} />
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 class="section-title">{"문의하기"}</h2>
                <p class="section-subtitle">{"궁금한 점이나 제안이 있다면 언제든 알려주세요."}</p>
                <ContactForm />
            </section>
        </div>
    }
}
