#[cfg(test)]
mod tests {
    use crate::core::cta::{PricingButtonStyle, SignupPlan};
    use crate::core::form::{self, FieldEntry, FormKind, SUBMIT_DELAY_MS, SubmitOutcome};
    use crate::core::progress::{PROGRESS_CEILING, ProgressAnimation, frame_increment};
    use crate::core::scroll::{AnchorRoute, HEADER_CLEARANCE, LinkOwner};
    use crate::core::timing::Debounce;
    use crate::core::{CtaAction, HeaderState, MenuState, StickyHeader, TabGroup};

    #[test]
    fn test_contact_sales_shows_demo_not_signup() {
        let action =
            CtaAction::from_pricing_label(PricingButtonStyle::Primary, "Contact Sales").unwrap();

        assert_eq!(action, CtaAction::Demo);
        let message = action.message();
        assert!(message.contains("+91-80-4000-1234"));
        assert_ne!(message, CtaAction::Signup(SignupPlan::Individual).message());
        assert_ne!(message, CtaAction::Signup(SignupPlan::Premium).message());
    }

    #[test]
    fn test_newsletter_submission_acknowledgement() {
        let kind = FormKind::from_declared(Some("newsletter"));
        let outcome = form::process_submit(
            kind,
            &[FieldEntry::new("email", "reader@example.com", true)],
        );

        let SubmitOutcome::Accepted { kind, .. } = outcome else {
            panic!("filled newsletter form must be accepted");
        };
        assert_eq!(SUBMIT_DELAY_MS, 500);
        assert_eq!(
            form::submission_message(&kind),
            "Successfully subscribed to our newsletter! Stay tuned for sustainability tips and product updates."
        );
    }

    #[test]
    fn test_empty_required_fields_never_reach_handler() {
        let fields = [
            FieldEntry::new("name", "", true),
            FieldEntry::new("email", "a@b.c", true),
            FieldEntry::new("company", "", true),
        ];
        let mut handler_calls = 0;

        match form::process_submit(FormKind::Demo, &fields) {
            SubmitOutcome::Accepted { .. } => handler_calls += 1,
            SubmitOutcome::Rejected(report) => {
                let invalid: Vec<_> = report.invalid_fields().collect();
                assert_eq!(invalid, vec!["name", "company"]);
                assert_eq!(report.status_of("email"), Some(form::FieldStatus::Valid));
            }
        }
        assert_eq!(handler_calls, 0);
    }

    #[test]
    fn test_nav_link_to_missing_anchor_only_closes_menu() {
        let mut menu = MenuState::Closed.toggle();
        assert!(menu.is_open());

        let route = AnchorRoute::classify("#does-not-exist", LinkOwner::Navigation);
        let plan = route.plan(None, 72.0, HEADER_CLEARANCE);
        if plan.close_menu {
            menu = menu.close();
        }

        assert_eq!(plan.scroll_to, None);
        assert_eq!(menu, MenuState::Closed);
        assert_eq!(menu.presentation().body_overflow, None);
    }

    #[test]
    fn test_audience_tabs_after_clicks() {
        let mut group = TabGroup::audiences();
        for id in ["enterprise", "individual", "enterprise"] {
            group.activate(id).unwrap();
            assert_eq!(group.active_button(), Some(id));
            assert_eq!(group.active_panel(), Some(id));
        }
    }

    #[test]
    fn test_sticky_header_tracks_scroll_sequence() {
        let mut header = StickyHeader::default();
        let offsets = [0.0, 30.0, 80.0, 400.0, 50.0, 51.0, 0.0];
        for offset in offsets {
            let state = header.observe(offset);
            assert_eq!(state == HeaderState::Scrolled, offset > 50.0);
        }
    }

    #[test]
    fn test_progress_settles_at_ceiling_after_three_seconds() {
        let mut previous = 0.0;
        for ms in (0..=4000).step_by(100) {
            let width = ProgressAnimation::width_at(ms as f64);
            assert!(width >= previous);
            assert!(width <= PROGRESS_CEILING);
            previous = width;
        }
        assert!((ProgressAnimation::width_at(3000.0) - PROGRESS_CEILING).abs() <= frame_increment());
    }

    #[test]
    fn test_debounced_resize_burst_applies_final_width_once() {
        let mut debounce = Debounce::new(150.0);
        let mut menu = MenuState::Open;

        // Browser delivers widths 700, 900, 740 in quick succession; each
        // timer fires 150ms after its event with the width read at that time.
        let events = [(0.0, 700.0), (30.0, 900.0), (60.0, 740.0)];
        let tokens: Vec<u64> = events.iter().map(|(t, _)| debounce.call(*t)).collect();

        let mut applied = 0;
        for token in tokens {
            if debounce.is_latest(token) {
                menu = menu.on_resize_with_breakpoint(740.0, 768.0);
                applied += 1;
            }
        }

        assert_eq!(applied, 1);
        assert!(menu.is_open(), "final width is below the breakpoint");
    }
}
