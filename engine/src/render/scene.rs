//! Castle Scene Renderer
//!
//! One instanced draw: a shared unit cube, scaled and rotated per
//! instance, covering every brick and prop. Instance data is rebuilt
//! from simulation state each frame and uploaded in a single write.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::camera::OrbitCamera;
use crate::castle::{BlockVisual, Prop};
use crate::sim::BlockState;

use super::block_mesh::{unit_cube, BlockVertex};
use super::gpu_context::GpuContext;
use super::instancing::{BlockInstance, INSTANCE_BUFFER_SIZE, MAX_INSTANCES};

const SHADER_SOURCE: &str = include_str!("../../../shaders/castle.wgsl");

const SUN_DIR: Vec3 = Vec3::new(0.35, 0.8, 0.49);
const SKY_COLOR: [f32; 3] = [0.53, 0.71, 0.92];

/// Per-frame shader uniforms.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 3],
    time: f32,
    sun_dir: [f32; 3],
    _pad0: f32,
    sky_color: [f32; 3],
    _pad1: f32,
}

static_assertions::assert_eq_size!(Uniforms, [u8; 112]);

/// Renderer state: pipeline, cube geometry, instance and uniform buffers.
pub struct CastleScene {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
}

impl CastleScene {
    pub fn new(gpu: &GpuContext) -> Self {
        let (vertices, indices) = unit_cube();
        let vertex_buffer = gpu.create_vertex_buffer("Block Cube Vertices", &vertices);
        let index_buffer = gpu.create_index_buffer("Block Cube Indices", &indices);
        let instance_buffer =
            gpu.create_dynamic_vertex_buffer("Block Instances", INSTANCE_BUFFER_SIZE as u64);

        let uniforms = Uniforms::zeroed();
        let uniform_buffer = gpu.create_uniform_buffer("Scene Uniforms", &uniforms);

        let bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Scene Bind Group Layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline = Self::create_pipeline(gpu, &bind_group_layout);

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            instance_buffer,
            instance_count: 0,
        }
    }

    fn create_pipeline(
        gpu: &GpuContext,
        bind_group_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Castle Shader"),
                source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
            });

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Castle Pipeline Layout"),
                bind_group_layouts: &[bind_group_layout],
                push_constant_ranges: &[],
            });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BlockVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        };

        gpu.device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Castle Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[vertex_layout, BlockInstance::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: gpu.format(),
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
    }

    /// Rebuild and upload the instance list from current simulation
    /// state. Blocks first, then props, truncated at the buffer cap.
    pub fn sync_instances(
        &mut self,
        gpu: &GpuContext,
        blocks: &[BlockState],
        visuals: &[BlockVisual],
        props: &[Prop],
    ) {
        let mut instances = Vec::with_capacity(blocks.len() + props.len());
        for (block, visual) in blocks.iter().zip(visuals.iter()) {
            instances.push(BlockInstance::from_block(block, visual));
        }
        for prop in props {
            instances.push(BlockInstance::from_prop(prop));
        }
        if instances.len() > MAX_INSTANCES {
            log::warn!(
                "instance list truncated: {} > {}",
                instances.len(),
                MAX_INSTANCES
            );
            instances.truncate(MAX_INSTANCES);
        }

        gpu.write_buffer(&self.instance_buffer, &instances);
        self.instance_count = instances.len() as u32;
    }

    /// Draw one frame.
    pub fn render(
        &self,
        gpu: &GpuContext,
        camera: &OrbitCamera,
        time: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        let uniforms = Uniforms {
            view_proj: camera.view_projection(gpu.aspect()).to_cols_array_2d(),
            camera_pos: camera.eye().to_array(),
            time,
            sun_dir: SUN_DIR.normalize().to_array(),
            _pad0: 0.0,
            sky_color: SKY_COLOR,
            _pad1: 0.0,
        };
        gpu.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = gpu.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Castle Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Castle Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: SKY_COLOR[0] as f64,
                            g: SKY_COLOR[1] as f64,
                            b: SKY_COLOR[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &gpu.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..self.index_count, 0, 0..self.instance_count);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
