//! Transition descriptors for cosmetic motion.
//!
//! A [`Transition`] is plain data: a start state, an end state, a duration and
//! a trigger. Components never animate anything themselves. They tag an
//! element with [`motion_attr`], which yields the transition's name for a
//! `data-motion` attribute, and [`motion_stylesheet`] turns every known
//! transition into CSS the browser plays on mount or hover.
//!
//! Whether the attribute is emitted at all is decided by the [`MotionLayer`]
//! found in the reactive context. Without one, the page renders statically.

use leptos::prelude::*;
use std::fmt::Write;

/// When a transition plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Mount,
    Hover,
}

/// Visual state at one end of a transition. Unset fields keep their resting
/// value (opacity 1, no offset, scale 1).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    pub opacity: Option<f32>,
    /// Vertical offset in pixels
    pub y: Option<f32>,
    pub scale: Option<f32>,
}

impl MotionState {
    pub const REST: MotionState = MotionState {
        opacity: None,
        y: None,
        scale: None,
    };

    pub const fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub const fn y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    pub const fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    fn write_vars(&self, out: &mut String, end: &str) {
        if let Some(opacity) = self.opacity {
            let _ = write!(out, "--motion-{end}-opacity:{opacity};");
        }
        if let Some(y) = self.y {
            let _ = write!(out, "--motion-{end}-y:{y}px;");
        }
        if let Some(scale) = self.scale {
            let _ = write!(out, "--motion-{end}-scale:{scale};");
        }
    }
}

/// Declarative description of one cosmetic animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Value of the `data-motion` attribute on tagged elements
    pub name: &'static str,
    pub trigger: Trigger,
    pub initial: MotionState,
    pub target: MotionState,
    pub duration_ms: u32,
}

impl Transition {
    /// Hero heading fades in while sliding up
    pub const HERO_HEADING: Transition = Transition {
        name: "hero-heading",
        trigger: Trigger::Mount,
        initial: MotionState::REST.opacity(0.0).y(8.0),
        target: MotionState::REST.opacity(1.0).y(0.0),
        duration_ms: 600,
    };

    /// Hero dashboard card fades in while growing slightly
    pub const HERO_CARD: Transition = Transition {
        name: "hero-card",
        trigger: Trigger::Mount,
        initial: MotionState::REST.opacity(0.0).scale(0.98),
        target: MotionState::REST.opacity(1.0).scale(1.0),
        duration_ms: 600,
    };

    /// Service cards lift on hover
    pub const SERVICE_LIFT: Transition = Transition {
        name: "service-lift",
        trigger: Trigger::Hover,
        initial: MotionState::REST,
        target: MotionState::REST.y(-6.0),
        duration_ms: 200,
    };

    /// Portfolio cards grow on hover
    pub const PROJECT_SCALE: Transition = Transition {
        name: "project-scale",
        trigger: Trigger::Hover,
        initial: MotionState::REST,
        target: MotionState::REST.scale(1.02),
        duration_ms: 200,
    };

    pub const ALL: [Transition; 4] = [
        Transition::HERO_HEADING,
        Transition::HERO_CARD,
        Transition::SERVICE_LIFT,
        Transition::PROJECT_SCALE,
    ];

    /// CSS custom properties consumed by the shared motion rules.
    pub fn css_vars(&self) -> String {
        let mut out = String::new();
        self.initial.write_vars(&mut out, "from");
        self.target.write_vars(&mut out, "to");
        let _ = write!(out, "--motion-duration:{}ms;", self.duration_ms);
        out
    }

    fn write_rule(&self, out: &mut String) {
        let selector = format!("[data-motion=\"{}\"]", self.name);
        match self.trigger {
            Trigger::Mount => {
                let _ = writeln!(
                    out,
                    "{selector}{{{}animation:motion-enter var(--motion-duration) ease-out both;}}",
                    self.css_vars()
                );
            }
            Trigger::Hover => {
                let _ = writeln!(
                    out,
                    "{selector}{{{}transition:transform var(--motion-duration) ease-out,opacity var(--motion-duration) ease-out;transform:{FROM_TRANSFORM};}}",
                    self.css_vars()
                );
                let _ = writeln!(
                    out,
                    "{selector}:hover{{opacity:var(--motion-to-opacity,1);transform:{TO_TRANSFORM};}}"
                );
            }
        }
    }
}

const FROM_TRANSFORM: &str =
    "translateY(var(--motion-from-y,0px)) scale(var(--motion-from-scale,1))";
const TO_TRANSFORM: &str = "translateY(var(--motion-to-y,0px)) scale(var(--motion-to-scale,1))";

/// Whether transition descriptors are attached to rendered elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionLayer {
    Animated,
    #[default]
    Static,
}

impl MotionLayer {
    /// Layer installed in the current reactive context, or [`MotionLayer::Static`]
    /// when none was provided.
    pub fn current() -> Self {
        use_context::<MotionLayer>().unwrap_or_default()
    }

    pub fn attr(self, transition: Transition) -> Option<&'static str> {
        match self {
            MotionLayer::Animated => Some(transition.name),
            MotionLayer::Static => None,
        }
    }
}

/// `data-motion` value for an element, `None` under the static layer.
pub fn motion_attr(transition: Transition) -> Option<&'static str> {
    MotionLayer::current().attr(transition)
}

/// Stylesheet playing every [`Transition::ALL`] entry. Motion is switched off
/// entirely under `prefers-reduced-motion`.
pub fn motion_stylesheet() -> String {
    let mut css = format!(
        "@keyframes motion-enter{{from{{opacity:var(--motion-from-opacity,1);transform:{FROM_TRANSFORM};}}to{{opacity:var(--motion-to-opacity,1);transform:{TO_TRANSFORM};}}}}\n"
    );
    for transition in Transition::ALL {
        transition.write_rule(&mut css);
    }
    css.push_str(
        "@media (prefers-reduced-motion: reduce){[data-motion]{animation:none !important;transition:none !important;transform:none !important;}}\n",
    );
    css
}
