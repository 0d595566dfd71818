/// Swapchain image acquired by [`Gpu::begin_frame`](super::Gpu::begin_frame),
/// plus the encoder that records into it.
///
/// Acquiring the next image waits until this one is presented, so finish it
/// within the same redraw.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl GpuFrame {
    /// Submits the recorded commands to `queue` and presents the image.
    pub(crate) fn present(self, queue: &wgpu::Queue) {
        let Self { surface_texture, view, encoder } = self;
        queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }
}
