use prism_engine::coords::Viewport;
use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::render::mesh::{FlatMeshRenderer, MeshUniforms};
use prism_gui::{Context, GuiInput, GuiRenderer, Response, Style, Window};

use crate::config::{Controls, DemoConfig, SIZE_RANGE};
use crate::fonts;
use crate::scene;

const PANEL_TITLE: &str = "GuiAppExample";

/// What the control panel reported this frame.
#[derive(Debug, Copy, Clone, Default)]
struct Panel {
    draw_triangle: Response,
    size: Response,
    color: Response,
}

impl Panel {
    fn changed(&self) -> bool {
        self.draw_triangle.changed || self.size.changed || self.color.changed
    }
}

/// Triangle demo: one mesh under one control panel.
pub struct DemoApp {
    config: DemoConfig,
    controls: Controls,
    gui: Context,
    gui_renderer: GuiRenderer,
    triangle: FlatMeshRenderer,
    frames: u64,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        let mut gui = Context::new(Style::dark());

        match fonts::load_system_font() {
            Some(bytes) => {
                if let Err(err) = gui.load_font(&bytes) {
                    log::warn!("{err}; widget labels will not be drawn");
                }
            }
            None => log::warn!("no system font found; widget labels will not be drawn"),
        }

        Self::with_context(config, gui)
    }

    fn with_context(config: DemoConfig, gui: Context) -> Self {
        Self {
            config,
            controls: Controls::default(),
            gui,
            gui_renderer: GuiRenderer::new(),
            triangle: FlatMeshRenderer::new(scene::triangle()),
            frames: 0,
        }
    }

    fn build_gui(&mut self, input: GuiInput, viewport: Viewport) -> Panel {
        self.gui.begin_frame(input, viewport);

        let controls = &mut self.controls;
        let panel = Window::new(PANEL_TITLE)
            .show(&mut self.gui, |ui| {
                ui.text("Hello from the GuiAppExample!");
                Panel {
                    draw_triangle: ui.checkbox("Draw Triangle", &mut controls.draw_triangle),
                    size: ui.slider_f32("Size", &mut controls.size, SIZE_RANGE),
                    color: ui.color_edit4("Color Picker", &mut controls.color),
                }
            })
            .unwrap_or_default();

        self.gui.end_frame();
        panel
    }

    /// Runs the GUI for this frame and returns the uniforms it produced.
    fn update(&mut self, input: GuiInput, viewport: Viewport) -> (Panel, MeshUniforms) {
        let panel = self.build_gui(input, viewport);
        if panel.changed() {
            log::debug!("controls changed: {:?}", self.controls);
        }
        (panel, self.uniforms())
    }

    fn uniforms(&self) -> MeshUniforms {
        MeshUniforms {
            color: self.controls.color,
            scale: self.controls.size,
        }
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let (_, uniforms) = self.update(GuiInput::from_engine(ctx.input, ctx.input_frame), Viewport::new(w, h));
        let draw_triangle = self.controls.draw_triangle;

        let triangle = &mut self.triangle;
        let gui = &mut self.gui;
        let gui_renderer = &mut self.gui_renderer;

        let control = ctx.render(self.config.clear_color, |rctx, target| {
            triangle.set_uniforms(rctx, uniforms);
            if draw_triangle {
                triangle.render(rctx, target);
            }
            gui_renderer.render(rctx, target, gui);
        });

        self.frames += 1;
        control
    }

    fn on_shutdown(&mut self) {
        log::info!("demo closed after {} frames", self.frames);
    }
}
