use leptos::prelude::*;

/// The handful of properties the page ever animates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl VisualState {
    pub const REST: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub const fn scaled(scale: f32) -> Self {
        Self { scale, ..Self::REST }
    }

    pub fn transform(&self) -> String {
        format!("translateY({}px) scale({})", self.translate_y, self.scale)
    }

    pub fn declarations(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Plays once when the block is mounted and stays in its final state.
    Mount,
    /// Plays forward while the pointer is over the block, backwards when it leaves.
    Hover,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub name: &'static str,
    pub from: VisualState,
    pub to: VisualState,
    pub trigger: Trigger,
    pub duration_ms: u32,
}

pub const FADE_UP: Transition = Transition {
    name: "fade-up",
    from: VisualState {
        opacity: 0.0,
        translate_y: 20.0,
        scale: 1.0,
    },
    to: VisualState::REST,
    trigger: Trigger::Mount,
    duration_ms: 500,
};

pub const FADE_ZOOM: Transition = Transition {
    name: "fade-zoom",
    from: VisualState {
        opacity: 0.0,
        translate_y: 0.0,
        scale: 0.9,
    },
    to: VisualState::REST,
    trigger: Trigger::Mount,
    duration_ms: 500,
};

pub const SKILL_HOVER: Transition = Transition {
    name: "skill-hover",
    from: VisualState::REST,
    to: VisualState::scaled(1.07),
    trigger: Trigger::Hover,
    duration_ms: 200,
};

pub const PROJECT_HOVER: Transition = Transition {
    name: "project-hover",
    from: VisualState::REST,
    to: VisualState::scaled(1.03),
    trigger: Trigger::Hover,
    duration_ms: 200,
};

const BORDER_FADE_MS: u32 = 150;

const MOUNT_TRANSITIONS: [Transition; 2] = [FADE_UP, FADE_ZOOM];

impl Transition {
    pub fn keyframes_name(&self) -> String {
        format!("portfolio-{}", self.name)
    }

    pub fn keyframes(&self) -> String {
        format!(
            "@keyframes {} {{ from {{ {} }} to {{ {} }} }}",
            self.keyframes_name(),
            self.from.declarations(),
            self.to.declarations(),
        )
    }

    /// Inline style starting a mount transition. `both` keeps the block hidden
    /// until the animation starts and pinned to `to` once it is over.
    pub fn animation(&self) -> String {
        debug_assert_eq!(self.trigger, Trigger::Mount);
        format!(
            "animation: {} {}ms ease-out both;",
            self.keyframes_name(),
            self.duration_ms
        )
    }

    /// Inline style for a hover transition given whether the pointer is over the block.
    /// The inline `transition` replaces the one from the class list, so it also
    /// has to carry the hover border fade of the cards.
    pub fn hover_style(&self, hovered: bool) -> String {
        debug_assert_eq!(self.trigger, Trigger::Hover);
        let state = if hovered { self.to } else { self.from };
        format!(
            "transform: {}; transition: transform {}ms ease-out, border-color {}ms ease-out;",
            state.transform(),
            self.duration_ms,
            BORDER_FADE_MS
        )
    }
}

/// Keyframes for every mount transition, meant for a single `<style>` element.
pub fn stylesheet() -> String {
    MOUNT_TRANSITIONS
        .iter()
        .map(Transition::keyframes)
        .collect::<Vec<String>>()
        .join("\n")
}

/// Hover state owned by one block, siblings each get their own.
#[derive(Clone, Copy, Debug)]
pub struct HoverState {
    hovered: RwSignal<bool>,
    transition: Transition,
}

impl HoverState {
    pub fn new(transition: Transition) -> Self {
        Self {
            hovered: RwSignal::new(false),
            transition,
        }
    }

    pub fn enter(&self) {
        self.hovered.set(true);
    }

    pub fn leave(&self) {
        self.hovered.set(false);
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered.get()
    }

    pub fn state(&self) -> VisualState {
        if self.is_hovered() {
            self.transition.to
        } else {
            self.transition.from
        }
    }

    pub fn style(&self) -> String {
        self.transition.hover_style(self.is_hovered())
    }

    /// Pointer handler moving the block to its hovered (`true`) or resting state.
    pub fn handler<E: 'static>(self, hovered: bool) -> impl Fn(E) + Copy + 'static {
        move |_| self.hovered.set(hovered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyframes_go_from_initial_to_rest() {
        assert_eq!(
            "@keyframes portfolio-fade-up { from { opacity: 0; transform: translateY(20px) scale(1); } to { opacity: 1; transform: translateY(0px) scale(1); } }",
            FADE_UP.keyframes()
        );
        assert!(FADE_ZOOM.keyframes().contains("from { opacity: 0; transform: translateY(0px) scale(0.9); }"));
    }

    #[test]
    fn stylesheet_only_holds_mount_transitions() {
        let css = stylesheet();
        assert!(css.contains("@keyframes portfolio-fade-up"));
        assert!(css.contains("@keyframes portfolio-fade-zoom"));
        assert!(!css.contains("hover"));
    }

    #[test]
    fn animation_runs_once_and_holds() {
        assert_eq!(
            "animation: portfolio-fade-zoom 500ms ease-out both;",
            FADE_ZOOM.animation()
        );
    }

    #[test]
    fn hover_style_switches_scale() {
        assert_eq!(
            "transform: translateY(0px) scale(1); transition: transform 200ms ease-out, border-color 150ms ease-out;",
            SKILL_HOVER.hover_style(false)
        );
        assert_eq!(
            "transform: translateY(0px) scale(1.07); transition: transform 200ms ease-out, border-color 150ms ease-out;",
            SKILL_HOVER.hover_style(true)
        );
        assert!(PROJECT_HOVER.hover_style(true).contains("scale(1.03)"));
    }

    #[test]
    fn hover_is_reversible_and_repeatable() {
        let owner = Owner::new();
        owner.with(|| {
            let card = HoverState::new(PROJECT_HOVER);
            for _ in 0..3 {
                card.enter();
                assert_eq!(1.03, card.state().scale);
                card.leave();
                assert_eq!(VisualState::REST, card.state());
            }
        });
    }

    #[test]
    fn hovering_one_block_leaves_its_siblings_alone() {
        let owner = Owner::new();
        owner.with(|| {
            let cards: Vec<HoverState> = (0..8).map(|_| HoverState::new(SKILL_HOVER)).collect();
            cards[3].enter();
            for (i, card) in cards.iter().enumerate() {
                let expected = if i == 3 { 1.07 } else { 1.0 };
                assert_eq!(expected, card.state().scale, "card {i}");
            }
            cards[3].leave();
            assert!(cards.iter().all(|card| !card.is_hovered()));
        });
    }

    #[test]
    fn pointer_handlers_only_touch_their_own_card() {
        let owner = Owner::new();
        owner.with(|| {
            let cards: Vec<HoverState> = (0..3).map(|_| HoverState::new(PROJECT_HOVER)).collect();
            let enter = cards[1].handler::<()>(true);
            let leave = cards[1].handler::<()>(false);

            enter(());
            assert_eq!(
                vec![1.0, 1.03, 1.0],
                cards.iter().map(|card| card.state().scale).collect::<Vec<f32>>()
            );
            assert!(cards[1].style().contains("scale(1.03)"));
            assert!(cards[0].style().contains("scale(1);"));

            leave(());
            enter(());
            leave(());
            assert!(cards.iter().all(|card| card.state() == VisualState::REST));
        });
    }
}
