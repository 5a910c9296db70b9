use leptos::prelude::*;

use crate::mount::MountLatch;

/// Renders nothing until the page has mounted in the browser, so the server
/// placeholder and the hydrated page never disagree about interactive markup.
#[component]
pub fn MountGate(children: ChildrenFn) -> impl IntoView {
    let latch = StoredValue::new(MountLatch::new());
    let (mounted, set_mounted) = signal(false);

    // effects only run in the browser, after the first render
    Effect::new(move |_| {
        if latch.try_update_value(|l| l.open()).unwrap_or(false) {
            log::debug!("page mounted");
            set_mounted.set(true);
        }
    });

    move || mounted.get().then(|| children())
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::prelude::*;

    use super::*;
    use crate::app::hero::TiltImage;

    #[test]
    fn test_gate_hides_form_before_mount() {
        let html = Owner::new().with(|| {
            view! {
                <MountGate>
                    <form>
                        <input name="from_name" />
                        <textarea name="message"></textarea>
                    </form>
                </MountGate>
            }
            .to_html()
        });
        assert!(!html.contains("<form"));
        assert!(!html.contains("<input"));
        assert!(!html.contains("<textarea"));
    }

    #[test]
    fn test_gate_hides_tilt_image_before_mount() {
        let html = Owner::new().with(|| {
            view! {
                <MountGate>
                    <TiltImage src="/desk.png" alt="Desk" />
                </MountGate>
            }
            .to_html()
        });
        assert!(!html.contains("<img"));
        assert!(!html.contains("/desk.png"));
    }
}
