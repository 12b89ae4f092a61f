use crate::camera;
use crate::constants::{AMBIENT_CLEAR_BOOST, CLEAR_RGB, POINT_SIZE};
use glam::Vec3;
use web_sys as web;

mod points;
use points::{create_instance_buffer, create_points_resources, PointInstance, PointUniforms};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points: points::PointsResources,
    // Reused every frame; sized to the particle count.
    staging: Vec<PointInstance>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    camera_z: f32,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        camera_z: f32,
        capacity: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let points = create_points_resources(&device, format, capacity);
        log::info!(
            "[gpu] surface {}x{} {:?}, {} point slots",
            width,
            height,
            format,
            capacity
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            points,
            staging: vec![PointInstance::default(); capacity],
            width,
            height,
            clear_color: clear_for(0.0),
            camera_z,
        })
    }

    /// Brighten the background slightly with the current amplitude.
    pub fn set_ambient_clear(&mut self, amplitude: f32) {
        self.clear_color = clear_for(amplitude);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Draw one frame of the point cloud. `rotation` is the Y angle applied to
    /// the whole set.
    pub fn render(
        &mut self,
        positions: &[Vec3],
        colors: &[[f32; 3]],
        rotation: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        let count = positions.len().min(colors.len());
        if count > self.points.capacity {
            self.points.instance_buffer = create_instance_buffer(&self.device, count);
            self.points.capacity = count;
        }
        self.staging.resize(count, PointInstance::default());
        for (slot, (p, c)) in self.staging.iter_mut().zip(positions.iter().zip(colors)) {
            slot.position = p.to_array();
            slot.color = *c;
        }

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let (sin, cos) = rotation.sin_cos();
        let uniforms = PointUniforms {
            view_proj: camera::view_proj(aspect, self.camera_z).to_cols_array_2d(),
            rot: [cos, sin],
            point_size: POINT_SIZE,
            aspect,
        };
        self.queue.write_buffer(
            &self.points.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );
        self.queue.write_buffer(
            &self.points.instance_buffer,
            0,
            bytemuck::cast_slice(&self.staging),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("points_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.points.pipeline);
            rpass.set_bind_group(0, &self.points.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.points.instance_buffer.slice(..));
            rpass.draw(0..6, 0..count as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn clear_for(amplitude: f32) -> wgpu::Color {
    let boost = AMBIENT_CLEAR_BOOST * amplitude.clamp(0.0, 1.0);
    wgpu::Color {
        r: (CLEAR_RGB[0] + boost * 0.8) as f64,
        g: (CLEAR_RGB[1] + boost * 0.6) as f64,
        b: (CLEAR_RGB[2] + boost) as f64,
        a: 1.0,
    }
}
