//! Prism GUI: an immediate-mode widget layer on top of `prism-engine`.
//!
//! Widgets are declared every frame inside a [`Window`]; the [`Context`]
//! only remembers interaction state between frames.
//!
//! ```rust,ignore
//! ctx.begin_frame(GuiInput::from_engine(input, input_frame), viewport);
//! Window::new("Settings").show(&mut ctx, |ui| {
//!     ui.text("Hello");
//!     ui.checkbox("Enabled", &mut enabled);
//!     ui.slider_f32("Scale", &mut scale, 0.5..=2.0);
//!     ui.color_edit4("Tint", &mut tint);
//! });
//! ctx.end_frame();
//! // later, inside FrameCtx::render:
//! gui_renderer.render(rctx, target, &mut ctx);
//! ```

mod context;
mod id;
mod input;
mod painter;
mod renderer;
mod response;
mod style;
mod ui;
mod widgets;
mod window;

pub use context::Context;
pub use id::{display_label, WidgetId};
pub use input::GuiInput;
pub use painter::Painter;
pub use renderer::GuiRenderer;
pub use response::Response;
pub use style::{Palette, Style};
pub use ui::Ui;
pub use window::Window;
