/// wgpu line renderer backing the wirecube window
use std::sync::Arc;

use bytemuck::Zeroable;
use log::{debug, warn};
use nalgebra::Point2;
use wgpu::util::DeviceExt;
use winit::window::Window;
use wirecube_core::Rgba;

use crate::WindowError;

/// Vertices reserved up front: two per cube edge
const INITIAL_CAPACITY: usize = 24;

/// One endpoint of a line segment, already in clip space
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl LineVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Convert a window pixel (origin top-left, y down) to normalized device coordinates
pub fn to_ndc(point: Point2<f64>, width: u32, height: u32) -> [f32; 2] {
    let x = point.x / f64::from(width.max(1)) * 2.0 - 1.0;
    let y = 1.0 - point.y / f64::from(height.max(1)) * 2.0;
    [x as f32, y as f32]
}

fn unit_color(color: Rgba) -> [f32; 4] {
    color.to_unit().map(|c| c as f32)
}

/// Immediate-mode line drawing on top of a wgpu surface
///
/// Lines are collected on the CPU and submitted in one draw on `present`,
/// over a background filled with the colour of the last `clear`.
pub struct LineRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    capacity: usize,
    pending: Vec<LineVertex>,
    draw_color: Rgba,
    background: Rgba,
}

impl LineRenderer {
    pub async fn new(window: Arc<Window>) -> Result<Self, WindowError> {
        let size = window.inner_size();

        // Initialize wgpu
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(WindowError::NoAdapter)?;
        debug!("Using adapter {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Wirecube Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None, // Trace path
            )
            .await?;

        // Prefer an sRGB format so white stays white
        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or(WindowError::NoSurfaceFormat)?;
        debug!("Surface format {:?}", format);

        // Frame pacing is the render loop's job, not the swapchain's
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoNoVsync,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Line Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Line Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[LineVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let vertex_buffer = Self::create_vertex_buffer(&device, INITIAL_CAPACITY);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            capacity: INITIAL_CAPACITY,
            pending: Vec::with_capacity(INITIAL_CAPACITY),
            draw_color: Rgba::WHITE,
            background: Rgba::BLACK,
        })
    }

    fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        let zeroed = vec![LineVertex::zeroed(); capacity];
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Line Vertex Buffer"),
            contents: bytemuck::cast_slice(&zeroed),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        })
    }

    pub fn set_draw_color(&mut self, color: Rgba) {
        self.draw_color = color;
    }

    /// Drop queued lines; the next present fills the background with the draw colour
    pub fn clear(&mut self) {
        self.background = self.draw_color;
        self.pending.clear();
    }

    pub fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>) {
        let color = unit_color(self.draw_color);
        for point in [from, to] {
            self.pending.push(LineVertex {
                position: to_ndc(point, self.config.width, self.config.height),
                color,
            });
        }
    }

    /// Submit queued lines over the background and show the frame
    pub fn present(&mut self) -> Result<(), WindowError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring and skipping frame");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("Timed out acquiring frame, skipping");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        if self.pending.len() > self.capacity {
            self.capacity = self.pending.len().next_power_of_two();
            debug!("Growing line buffer to {} vertices", self.capacity);
            self.vertex_buffer = Self::create_vertex_buffer(&self.device, self.capacity);
        }
        if !self.pending.is_empty() {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.pending));
        }

        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Line Encoder"),
        });

        {
            let [r, g, b, a] = self.background.to_unit();
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Line Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if !self.pending.is_empty() {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.draw(0..self.pending.len() as u32, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
