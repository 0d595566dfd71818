use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// Picks the swapchain format from the formats the surface supports.
///
/// With `prefer_srgb` an sRGB-encoding 8-bit format wins; without it the first
/// non-sRGB format wins. Falls back to the surface's first format.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = *formats.first()?;

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        if let Some(f) = preferred.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
        return Some(first);
    }

    Some(formats.iter().copied().find(|f| !f.is_srgb()).unwrap_or(first))
}

/// Requested mode if the surface supports it, else `Opaque`, else the first listed.
pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    let opaque = wgpu::CompositeAlphaMode::Opaque;
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.contains(&opaque).then_some(opaque))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Applies a new drawable size. wgpu rejects 0x0 surfaces, so configuration is
/// deferred until the window has a non-zero size again.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
}

pub(crate) fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat as F;

    #[test]
    fn srgb_preferred_when_requested() {
        let formats = [F::Rgba16Float, F::Bgra8Unorm, F::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(F::Bgra8UnormSrgb));
    }

    #[test]
    fn linear_preferred_when_srgb_not_requested() {
        let formats = [F::Bgra8UnormSrgb, F::Bgra8Unorm];
        assert_eq!(choose_surface_format(&formats, false), Some(F::Bgra8Unorm));
    }

    #[test]
    fn falls_back_to_first_format() {
        assert_eq!(choose_surface_format(&[F::Bgra8UnormSrgb], false), Some(F::Bgra8UnormSrgb));
        assert_eq!(choose_surface_format(&[F::Rgba16Float], true), Some(F::Rgba16Float));
    }

    #[test]
    fn no_formats_is_none() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn alpha_mode_request_must_be_supported() {
        use wgpu::CompositeAlphaMode as A;
        let supported = [A::Opaque, A::PreMultiplied];
        assert_eq!(choose_alpha_mode(&supported, Some(A::PreMultiplied)), A::PreMultiplied);
        assert_eq!(choose_alpha_mode(&supported, Some(A::PostMultiplied)), A::Opaque);
        assert_eq!(choose_alpha_mode(&supported, None), A::Opaque);
        assert_eq!(choose_alpha_mode(&[], None), A::Auto);
    }

    #[test]
    fn opaque_wins_over_first_listed_mode() {
        use wgpu::CompositeAlphaMode as A;
        let supported = [A::PreMultiplied, A::Opaque];
        assert_eq!(choose_alpha_mode(&supported, None), A::Opaque);
        assert_eq!(choose_alpha_mode(&supported, Some(A::PostMultiplied)), A::Opaque);
        assert_eq!(choose_alpha_mode(&[A::PostMultiplied], Some(A::Opaque)), A::PostMultiplied);
    }

    #[test]
    fn surface_errors_classified() {
        use wgpu::SurfaceError as E;
        assert_eq!(classify_surface_error(&E::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&E::Outdated), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&E::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify_surface_error(&E::OutOfMemory), SurfaceErrorAction::Fatal);
    }
}
