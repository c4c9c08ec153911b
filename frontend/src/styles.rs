use log::warn;
use stylist::yew::Global;
use stylist::StyleSource;
use yew::prelude::*;

/// Animation rules shared by every section of the page.
const GLOBAL_CSS: &str = r#"
    section {
        opacity: 0;
        transform: translateY(30px);
        transition: all 0.8s ease;
    }

    section.section-visible {
        opacity: 1;
        transform: translateY(0);
    }

    .fade-in {
        opacity: 0;
        transition: opacity 0.6s ease;
    }

    .fade-in.visible {
        opacity: 1;
    }

    .notification-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
    }

    .notification-close {
        background: none;
        border: none;
        color: white;
        font-size: 1.5rem;
        cursor: pointer;
        padding: 0;
        line-height: 1;
    }

    .nav-link.active {
        color: #6366f1;
    }

    .nav-link.active::after {
        width: 100%;
    }

    .feature-card {
        transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1);
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
    }

    .feature-card:hover {
        transform: translateY(-12px) scale(1.03);
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
    }

    .company-card {
        transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1);
    }

    .company-card:hover {
        transform: translateY(-12px) scale(1.05) rotateY(5deg);
    }

    .assignment-item {
        animation: slideInFromLeft 0.6s ease forwards;
        opacity: 0;
        transform: translateX(-20px);
    }

    .assignment-item:hover {
        transform: translateX(8px) scale(1.02);
    }

    @keyframes slideInFromLeft {
        to {
            opacity: 1;
            transform: translateX(0);
        }
    }

    .phone-mockup {
        transform: perspective(1000px) rotateY(-15deg) rotateX(5deg);
        transition: all 0.6s cubic-bezier(0.4, 0, 0.2, 1);
    }

    .showcase-phone {
        transform: perspective(1000px) rotateY(15deg) rotateX(-5deg);
        transition: all 0.6s cubic-bezier(0.4, 0, 0.2, 1);
    }

    .floating-element {
        transition: all 0.3s ease;
    }

    .download-btn {
        transition: transform 0.15s ease;
    }

    .download-btn.pressed {
        transform: scale(0.95);
    }

    .ai-icon {
        position: relative;
    }

    .ai-icon::before {
        content: '';
        position: absolute;
        top: -2px;
        left: -2px;
        right: -2px;
        bottom: -2px;
        background: linear-gradient(135deg, #667eea, #764ba2, #f093fb);
        border-radius: 18px;
        z-index: -1;
        opacity: 0;
        transition: opacity 0.3s ease;
        filter: blur(4px);
    }

    .ai-icon:hover::before {
        opacity: 0.7;
    }
"#;

fn page_stylesheet() -> Option<StyleSource> {
    match GLOBAL_CSS.parse::<StyleSource>() {
        Ok(css) => Some(css),
        Err(e) => {
            warn!("Could not parse page stylesheet: {}", e);
            None
        }
    }
}

#[function_component(PageStyles)]
pub fn page_styles() -> Html {
    let css = use_memo(|_| page_stylesheet(), ());
    match (*css).clone() {
        Some(css) => html! { <Global css={css} /> },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_stylesheet_parses() {
        assert!(page_stylesheet().is_some());
    }
}
