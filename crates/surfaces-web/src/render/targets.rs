use super::helpers;
use wgpu;

/// Multisampled color target resolved into the swapchain each frame.
///
/// Recreated whenever the surface size changes.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    samples: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        samples: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) =
            helpers::create_color_texture(device, "msaa_color", width, height, format, samples);
        Self {
            msaa_tex,
            msaa_view,
            format,
            samples,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.msaa_tex, self.msaa_view) = helpers::create_color_texture(
            device,
            "msaa_color",
            width,
            height,
            self.format,
            self.samples,
        );
    }
}
