use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) except that
/// [`view`](Component::view) receives the area to draw into, so a parent
/// decides where each child lives. Children talk to their parent by
/// returning [`Command`]s carrying their own message type; the parent lifts
/// them with [`Command::map`] and reacts to the variants it cares about.
///
/// ```rust,ignore
/// use bouquet_core::{Command, Component, Model};
/// use bouquet_widgets::control::{self, Control};
///
/// struct App { bouquets: Control }
///
/// enum AppMsg { Bouquets(control::Message) }
///
/// impl Model for App {
///     // ...
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Bouquets(control::Message::ItemSelected(name)) => {
///                 self.playing = Some(name);
///                 Command::none()
///             }
///             AppMsg::Bouquets(m) => self.bouquets.update(m).map(AppMsg::Bouquets),
///         }
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area` of the [`Frame`].
    ///
    /// Components that draw overlays may paint outside `area` (over the
    /// whole frame); everything else stays inside the rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Declare active subscriptions for this component.
    ///
    /// The parent collects these and includes them, mapped, in its own
    /// [`Model::subscriptions`](crate::Model::subscriptions).
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently captures input.
    ///
    /// A parent uses this to decide which child receives key and mouse
    /// events first.
    fn focused(&self) -> bool {
        false
    }
}
