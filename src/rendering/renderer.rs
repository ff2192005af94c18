use std::sync::Arc;

use anyhow::Context;
use wgpu::util::DeviceExt;
use wgpu::{CommandEncoderDescriptor, PipelineCompilationOptions};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::camera::{Camera, CameraUniform};
use crate::rendering::mesh::{SceneMesh, Vertex, VERTEX_LAYOUT};
use crate::rendering::texture::DepthTexture;
use crate::rendering::FrameRenderer;
use crate::scene_graph::Scene;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.95,
    g: 0.95,
    b: 0.95,
    a: 1.0,
};

/// Surface format and modes picked from what the adapter reports.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SurfaceSettings {
    format: wgpu::TextureFormat,
    present_mode: wgpu::PresentMode,
    alpha_mode: wgpu::CompositeAlphaMode,
}

impl SurfaceSettings {
    /// Prefers an sRGB format. An adapter that reports no formats or modes
    /// cannot present to this surface.
    fn choose(caps: &wgpu::SurfaceCapabilities) -> anyhow::Result<Self> {
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first())
            .copied()
            .context("Surface is incompatible with the adapter: no texture formats")?;
        let present_mode = caps
            .present_modes
            .first()
            .copied()
            .context("Surface reports no present modes")?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .context("Surface reports no alpha modes")?;

        Ok(Self {
            format,
            present_mode,
            alpha_mode,
        })
    }
}

pub struct WgpuRenderer {
    pub window: Arc<Window>,
    pub size: PhysicalSize<u32>,

    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_texture: DepthTexture,

    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    line_pipeline: wgpu::RenderPipeline,
    triangle_pipeline: wgpu::RenderPipeline,
}

impl WgpuRenderer {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<WgpuRenderer> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("No suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                label: None,
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("Failed to request device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let SurfaceSettings {
            format: surface_format,
            present_mode,
            alpha_mode,
        } = SurfaceSettings::choose(&surface_caps)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture = DepthTexture::new(&device, &config, "Depth Texture");

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Uniform Buffer"),
            contents: bytemuck::cast_slice(&[CameraUniform::default()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("camera_bind_group_layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera_bind_group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene pipeline layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::include_wgsl!("shaders/scene.wgsl"));

        let create_pipeline = |label: &str, topology: wgpu::PrimitiveTopology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[VERTEX_LAYOUT],
                    compilation_options: PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: config.format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DepthTexture::DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        };

        let line_pipeline = create_pipeline("Line pipeline", wgpu::PrimitiveTopology::LineList);
        let triangle_pipeline =
            create_pipeline("Triangle pipeline", wgpu::PrimitiveTopology::TriangleList);

        log::info!(
            "Renderer ready: {} ({:?}), surface format {:?}",
            adapter.get_info().name,
            adapter.get_info().backend,
            config.format
        );

        Ok(Self {
            window,
            size,
            surface,
            device,
            queue,
            config,
            depth_texture,
            camera_buffer,
            camera_bind_group,
            line_pipeline,
            triangle_pipeline,
        })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.depth_texture.resize(&self.device, &self.config);
        }
    }

    fn vertex_buffer(&self, label: &str, vertices: &[Vertex]) -> Option<wgpu::Buffer> {
        if vertices.is_empty() {
            return None;
        }

        Some(
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(label),
                    contents: bytemuck::cast_slice(vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
        )
    }
}

impl FrameRenderer for WgpuRenderer {
    type Error = wgpu::SurfaceError;

    fn render_frame(&mut self, scene: &Scene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[CameraUniform::from_camera(camera)]),
        );

        let mesh = SceneMesh::from_scene(scene);
        let triangles = self.vertex_buffer("Triangle vertex buffer", &mesh.triangles);
        let lines = self.vertex_buffer("Line vertex buffer", &mesh.lines);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.depth_texture.view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

            if let Some(buffer) = &triangles {
                render_pass.set_pipeline(&self.triangle_pipeline);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(0..mesh.triangles.len() as u32, 0..1);
            }

            if let Some(buffer) = &lines {
                render_pass.set_pipeline(&self.line_pipeline);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(0..mesh.lines.len() as u32, 0..1);
            }
        }

        self.queue.submit([encoder.finish()]);
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(formats: Vec<wgpu::TextureFormat>) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats,
            present_modes: vec![wgpu::PresentMode::Fifo],
            alpha_modes: vec![wgpu::CompositeAlphaMode::Opaque],
            usages: wgpu::TextureUsages::RENDER_ATTACHMENT,
        }
    }

    #[test]
    fn test_surface_settings_prefer_srgb() {
        let settings = SurfaceSettings::choose(&caps(vec![
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ]))
        .unwrap();

        assert_eq!(settings.format, wgpu::TextureFormat::Bgra8UnormSrgb);
        assert_eq!(settings.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(settings.alpha_mode, wgpu::CompositeAlphaMode::Opaque);
    }

    #[test]
    fn test_surface_settings_fall_back_to_first_format() {
        let settings = SurfaceSettings::choose(&caps(vec![wgpu::TextureFormat::Rgba16Float])).unwrap();
        assert_eq!(settings.format, wgpu::TextureFormat::Rgba16Float);
    }

    #[test]
    fn test_incompatible_surface_is_an_error() {
        assert!(SurfaceSettings::choose(&caps(Vec::new())).is_err());

        let mut no_modes = caps(vec![wgpu::TextureFormat::Bgra8UnormSrgb]);
        no_modes.present_modes.clear();
        assert!(SurfaceSettings::choose(&no_modes).is_err());

        let mut no_alpha = caps(vec![wgpu::TextureFormat::Bgra8UnormSrgb]);
        no_alpha.alpha_modes.clear();
        assert!(SurfaceSettings::choose(&no_alpha).is_err());
    }
}
