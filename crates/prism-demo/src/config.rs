use std::ops::RangeInclusive;

use prism_engine::device::GpuInit;
use prism_engine::paint::Color;
use prism_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Accepted range of the triangle scale slider.
pub const SIZE_RANGE: RangeInclusive<f32> = 0.5..=2.0;

/// Startup configuration of the demo window.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub clear_color: Color,
    pub vsync: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "GUIAppExample".to_string(),
            width: 400.0,
            height: 400.0,
            clear_color: Color::opaque(0.7, 0.8, 0.1),
            vsync: true,
        }
    }
}

impl DemoConfig {
    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            resizable: true,
        }
    }

    /// The triangle writes its color straight to the swapchain, so a
    /// non-sRGB surface keeps the picked values unchanged on screen. The
    /// window is opaque even though the triangle's alpha is below one.
    pub fn gpu(&self) -> GpuInit {
        GpuInit {
            prefer_srgb: false,
            present_mode: if self.vsync {
                wgpu::PresentMode::Fifo
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode: Some(wgpu::CompositeAlphaMode::Opaque),
            ..GpuInit::default()
        }
    }
}

/// Values edited through the control panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub draw_triangle: bool,
    pub size: f32,
    /// Straight-alpha RGBA.
    pub color: [f32; 4],
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            draw_triangle: true,
            size: 1.0,
            color: [0.5, 0.6, 1.0, 0.3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_window() {
        let cfg = DemoConfig::default();
        assert_eq!(cfg.title, "GUIAppExample");
        assert_eq!((cfg.width, cfg.height), (400.0, 400.0));
        assert_eq!(cfg.clear_color, Color::from_premul(0.7, 0.8, 0.1, 1.0));

        let rt = cfg.runtime();
        assert_eq!(rt.initial_size, LogicalSize::new(400.0, 400.0));
    }

    #[test]
    fn vsync_selects_present_mode() {
        let mut cfg = DemoConfig::default();
        assert_eq!(cfg.gpu().present_mode, wgpu::PresentMode::Fifo);
        assert!(!cfg.gpu().prefer_srgb);
        assert_eq!(cfg.gpu().alpha_mode, Some(wgpu::CompositeAlphaMode::Opaque));
        cfg.vsync = false;
        assert_eq!(cfg.gpu().present_mode, wgpu::PresentMode::AutoNoVsync);
    }

    #[test]
    fn default_controls_sit_inside_slider_range() {
        let c = Controls::default();
        assert!(c.draw_triangle);
        assert!(SIZE_RANGE.contains(&c.size));
        assert_eq!(c.color, [0.5, 0.6, 1.0, 0.3]);
    }
}
