//! Footer component
//!
//! Brand mark, in-app navigation, social icons and the copyright line.
//! Social icons are client-only: server markup and the first client pass
//! never contain them, so hydration sees identical trees.

use leptos::*;
use leptos_router::A;

use crate::{FooterConfig, MountPhase};

/// `target` for links that leave the app.
pub const EXTERNAL_TARGET: &str = "_blank";

/// `rel` for links that leave the app (no `window.opener`, no referrer).
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Flip `phase` to mounted. Later calls leave the signal untouched, so
/// subscribers re-render exactly once.
pub fn mark_mounted(phase: RwSignal<MountPhase>) {
    // Footer may have been unmounted before the frame fired.
    let Some(current) = phase.try_get_untracked() else {
        return;
    };
    if current.is_mounted() {
        return;
    }

    phase.try_update(|p| p.advance());
    log::debug!("Footer mounted, revealing social links");
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = FooterConfig::default();
    let phase = create_rw_signal(MountPhase::Initial);

    // Effects never run during server rendering; on the client wait one
    // frame so hydration of the first pass is done before the flip.
    create_effect(move |_| {
        request_animation_frame(move || mark_mounted(phase));
    });

    footer_view(config, phase)
}

/// Footer markup for a given phase signal.
///
/// Social links are read from `phase` reactively; everything else is static.
pub fn footer_view(config: FooterConfig, phase: RwSignal<MountPhase>) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-main">
                <h2 class="footer-brand">
                    {config.brand.lead}
                    <span class="footer-brand-accent">{config.brand.accent}</span>
                </h2>

                <nav class="footer-nav">
                    {config
                        .navigation()
                        .map(|link| view! {
                            <A href=link.destination class="footer-link">
                                {link.label}
                            </A>
                        })
                        .collect_view()}
                </nav>

                <div class="footer-social">
                    {move || {
                        config
                            .visible_social(phase.get())
                            .into_iter()
                            .map(|link| view! {
                                <a
                                    href=link.destination
                                    target=EXTERNAL_TARGET
                                    rel=EXTERNAL_REL
                                    class="footer-social-link"
                                    title=link.label
                                    aria-label=link.label
                                >
                                    {link.display()}
                                </a>
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="footer-bottom">
                <p>{config.copyright_line()}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_render_has_nav_but_no_social() {
        let runtime = create_runtime();
        let config = FooterConfig::default();
        let phase = create_rw_signal(MountPhase::Initial);

        assert_eq!(config.navigation().count(), 4);
        assert!(config.visible_social(phase.get_untracked()).is_empty());

        runtime.dispose();
    }

    #[test]
    fn test_mount_reveals_three_social_links() {
        let runtime = create_runtime();
        let config = FooterConfig::default();
        let phase = create_rw_signal(MountPhase::Initial);

        mark_mounted(phase);

        let social = config.visible_social(phase.get_untracked());
        assert_eq!(social.len(), 3);
        for link in social {
            assert!(link.destination.starts_with("https://"));
            assert!(!link.display().is_empty());
        }
        let nav: Vec<_> = config.navigation().map(|l| l.destination).collect();
        assert_eq!(nav, vec!["/", "/movies", "/contact", "/privacy"]);

        runtime.dispose();
    }

    // Effects are inert when rendering on the server.
    #[cfg(not(feature = "ssr"))]
    #[test]
    fn test_repeated_mount_notifies_once() {
        use std::cell::Cell;
        use std::rc::Rc;

        let runtime = create_runtime();
        let phase = create_rw_signal(MountPhase::Initial);
        let runs = Rc::new(Cell::new(0));

        create_effect({
            let runs = Rc::clone(&runs);
            move |_| {
                let _ = phase.get();
                runs.set(runs.get() + 1);
            }
        });
        assert_eq!(runs.get(), 1);

        mark_mounted(phase);
        assert_eq!(runs.get(), 2);

        mark_mounted(phase);
        mark_mounted(phase);
        assert_eq!(runs.get(), 2);
        assert_eq!(phase.get_untracked(), MountPhase::Mounted);

        runtime.dispose();
    }

    #[test]
    fn test_external_link_attributes() {
        assert_eq!(EXTERNAL_TARGET, "_blank");
        assert!(EXTERNAL_REL.contains("noopener"));
        assert!(EXTERNAL_REL.contains("noreferrer"));
    }
}
