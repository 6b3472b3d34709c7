//! Supplemental style rules appended to the document head at startup.

/// Id given to the injected `<style>` element
pub const STYLE_ELEMENT_ID: &str = "envirie-supplemental-styles";

pub const SUPPLEMENTAL_CSS: &str = r#"
.nav-menu.active {
    display: flex !important;
    position: fixed;
    top: 70px;
    left: 0;
    right: 0;
    background: var(--color-surface);
    flex-direction: column;
    padding: var(--space-24);
    box-shadow: var(--shadow-lg);
    border-top: 1px solid var(--color-border);
    z-index: 999;
}

.nav-toggle.active span:nth-child(1) {
    transform: rotate(45deg) translate(5px, 5px);
}

.nav-toggle.active span:nth-child(2) {
    opacity: 0;
}

.nav-toggle.active span:nth-child(3) {
    transform: rotate(-45deg) translate(7px, -6px);
}

.header.scrolled {
    background: rgba(252, 252, 249, 0.98);
    backdrop-filter: blur(15px);
}

@media (max-width: 768px) {
    .nav-menu {
        display: none;
    }

    .nav-actions {
        order: -1;
        flex: 1;
        justify-content: flex-end;
        gap: var(--space-8);
    }

    .nav-actions .btn {
        padding: var(--space-6) var(--space-12);
        font-size: var(--font-size-sm);
    }
}

.form-control.error {
    border-color: var(--color-error);
    box-shadow: 0 0 0 3px rgba(var(--color-error-rgb), 0.1);
}

.animate-in {
    animation: slideInUp 0.6s ease-out;
}

@keyframes slideInUp {
    from {
        opacity: 0;
        transform: translateY(30px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}
"#;
