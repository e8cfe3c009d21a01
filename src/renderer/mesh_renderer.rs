use std::collections::HashMap;
use std::num::NonZeroU64;
use std::sync::Arc;

use glam::Mat4;
use wgpu::util::DeviceExt;
use wgpu::{BindGroup, BindGroupLayout, Buffer, Device, Queue, RenderPipeline, TextureView};

use super::vertex::Vertex;
use super::{RenderError, SceneRenderer};
use crate::core::GpuContext;
use crate::scene::{tessellate, DrawItem, LightKind, NodeId, PerspectiveCamera, Scene, Shading};
use crate::scene_manager::SceneError;

pub const MSAA_SAMPLES: u32 = 4;
pub const MAX_POINT_LIGHTS: usize = 4;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const INITIAL_OBJECT_CAPACITY: usize = 64;

/// Scene-wide uniform: camera and lights
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 4],
    pub ambient: [f32; 4],
    pub light_positions: [[f32; 4]; MAX_POINT_LIGHTS],
    pub light_colors: [[f32; 4]; MAX_POINT_LIGHTS],
    pub light_count: [u32; 4],
}

impl SceneUniform {
    pub fn new(scene: &Scene, camera: &PerspectiveCamera) -> Self {
        let mut uniform = Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_position: camera.position.extend(1.0).to_array(),
            ambient: [0.0; 4],
            light_positions: [[0.0; 4]; MAX_POINT_LIGHTS],
            light_colors: [[0.0; 4]; MAX_POINT_LIGHTS],
            light_count: [0; 4],
        };

        let mut points = 0;
        for light in scene.lights() {
            match light.kind {
                LightKind::Ambient => {
                    for (channel, color) in uniform.ambient.iter_mut().zip(light.color) {
                        *channel += color * light.intensity;
                    }
                }
                LightKind::Point { position, range } => {
                    if points == MAX_POINT_LIGHTS {
                        log::debug!("Ignoring point light beyond {}", MAX_POINT_LIGHTS);
                        continue;
                    }
                    uniform.light_positions[points] = position.extend(range).to_array();
                    let [r, g, b] = light.color;
                    uniform.light_colors[points] = [r, g, b, light.intensity];
                    points += 1;
                }
            }
        }
        uniform.light_count[0] = points as u32;
        uniform
    }
}

/// Per-draw uniform, bound with a dynamic offset
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub emissive: [f32; 4],
}

impl ObjectUniform {
    pub fn new(item: &DrawItem<'_>) -> Self {
        let material = &item.mesh.material;
        let [r, g, b] = material.color;
        let [er, eg, eb] = material.emissive;
        let unlit = match material.shading {
            Shading::Phong => 0.0,
            Shading::Basic => 1.0,
        };

        Self {
            model: item.world.to_cols_array_2d(),
            normal_matrix: item.world.inverse().transpose().to_cols_array_2d(),
            color: [r, g, b, material.opacity],
            emissive: [er, eg, eb, unlit],
        }
    }
}

/// Opaque meshes first, then transparent ones back to front
pub fn draw_order(items: &[DrawItem<'_>], view: Mat4) -> Vec<usize> {
    let depth = |item: &DrawItem<'_>| view.transform_point3(item.world.w_axis.truncate()).z;

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        let (ia, ib) = (&items[a], &items[b]);
        let (ta, tb) = (ia.mesh.material.is_transparent(), ib.mesh.material.is_transparent());
        ta.cmp(&tb).then_with(|| {
            if ta {
                depth(ia).total_cmp(&depth(ib))
            } else {
                std::cmp::Ordering::Equal
            }
        })
    });
    order
}

struct GpuMesh {
    vertex_buffer: Buffer,
    index_buffer: Buffer,
    index_count: u32,
}

/// Per-frame destination for [`MeshRenderer`]
pub struct FrameTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub view: &'a TextureView,
}

/// Forward renderer for the scene graph: 4x MSAA, depth tested, alpha
/// blended, cleared to transparent
pub struct MeshRenderer {
    device: Arc<Device>,
    queue: Arc<Queue>,
    format: wgpu::TextureFormat,
    pipeline: RenderPipeline,
    scene_buffer: Buffer,
    scene_bind_group: BindGroup,
    object_layout: BindGroupLayout,
    object_buffer: Buffer,
    object_bind_group: BindGroup,
    object_stride: u64,
    object_capacity: usize,
    meshes: HashMap<NodeId, GpuMesh>,
    msaa_view: TextureView,
    depth_view: TextureView,
    width: u32,
    height: u32,
}

impl MeshRenderer {
    pub fn new(gpu: &GpuContext) -> Result<Self, SceneError> {
        let device = gpu.device().clone();
        let queue = gpu.queue().clone();
        let format = gpu.format();
        let dimensions = gpu.dimensions();

        // Pipeline creation reports problems through the error scope, not a Result
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let scene_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Scene Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Object Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: NonZeroU64::new(std::mem::size_of::<ObjectUniform>() as u64),
                },
                count: None,
            }],
        });

        let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Scene Uniform Buffer"),
            size: std::mem::size_of::<SceneUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &scene_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
        });

        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let object_stride = (std::mem::size_of::<ObjectUniform>() as u64).div_ceil(alignment) * alignment;
        let (object_buffer, object_bind_group) =
            Self::create_object_storage(&device, &object_layout, object_stride, INITIAL_OBJECT_CAPACITY);

        let pipeline = Self::create_pipeline(&device, &scene_layout, &object_layout, format);
        let msaa_view = Self::create_msaa_view(&device, format, dimensions.width, dimensions.height);
        let depth_view = Self::create_depth_view(&device, dimensions.width, dimensions.height);

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(SceneError::RendererUnavailable(error.to_string()));
        }

        log::debug!("Mesh renderer ready: {:?}, object stride {}", format, object_stride);

        Ok(Self {
            device,
            queue,
            format,
            pipeline,
            scene_buffer,
            scene_bind_group,
            object_layout,
            object_buffer,
            object_bind_group,
            object_stride,
            object_capacity: INITIAL_OBJECT_CAPACITY,
            meshes: HashMap::new(),
            msaa_view,
            depth_view,
            width: dimensions.width,
            height: dimensions.height,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn create_pipeline(
        device: &Device,
        scene_layout: &BindGroupLayout,
        object_layout: &BindGroupLayout,
        format: wgpu::TextureFormat,
    ) -> RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mesh Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("mesh.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mesh Pipeline Layout"),
            bind_group_layouts: &[scene_layout, object_layout],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mesh Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
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
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: MSAA_SAMPLES,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    fn create_object_storage(
        device: &Device,
        layout: &BindGroupLayout,
        stride: u64,
        capacity: usize,
    ) -> (Buffer, BindGroup) {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Object Uniform Buffer"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Object Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: NonZeroU64::new(std::mem::size_of::<ObjectUniform>() as u64),
                }),
            }],
        });

        (buffer, bind_group)
    }

    fn create_msaa_view(device: &Device, format: wgpu::TextureFormat, width: u32, height: u32) -> TextureView {
        device
            .create_texture(&wgpu::TextureDescriptor {
                label: Some("MSAA Color Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: MSAA_SAMPLES,
                dimension: wgpu::TextureDimension::D2,
                format,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
            .create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_depth_view(device: &Device, width: u32, height: u32) -> TextureView {
        device
            .create_texture(&wgpu::TextureDescriptor {
                label: Some("Depth Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: MSAA_SAMPLES,
                dimension: wgpu::TextureDimension::D2,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
            .create_view(&wgpu::TextureViewDescriptor::default())
    }

    /// Upload geometry for nodes seen for the first time
    fn upload_meshes(&mut self, items: &[DrawItem<'_>]) {
        for item in items {
            if self.meshes.contains_key(&item.node) {
                continue;
            }

            let data = tessellate(&item.mesh.geometry);
            let vertices = Vertex::from_mesh(&data);

            let vertex_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Index Buffer"),
                contents: bytemuck::cast_slice(&data.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

            self.meshes.insert(
                item.node,
                GpuMesh {
                    vertex_buffer,
                    index_buffer,
                    index_count: data.indices.len() as u32,
                },
            );
        }
    }

    fn reserve_objects(&mut self, count: usize) {
        if count <= self.object_capacity {
            return;
        }

        let capacity = count.next_power_of_two();
        let (buffer, bind_group) =
            Self::create_object_storage(&self.device, &self.object_layout, self.object_stride, capacity);
        self.object_buffer = buffer;
        self.object_bind_group = bind_group;
        self.object_capacity = capacity;
        log::debug!("Object uniform buffer grown to {} slots", capacity);
    }
}

impl SceneRenderer for MeshRenderer {
    type Target<'a> = FrameTarget<'a>;

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.width = width;
        self.height = height;
        self.msaa_view = Self::create_msaa_view(&self.device, self.format, width, height);
        self.depth_view = Self::create_depth_view(&self.device, width, height);
    }

    fn render(
        &mut self,
        scene: &Scene,
        camera: &PerspectiveCamera,
        target: FrameTarget<'_>,
    ) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::EmptyTarget {
                width: self.width,
                height: self.height,
            });
        }

        let items = scene.draw_list();
        self.upload_meshes(&items);
        self.reserve_objects(items.len());

        let order = draw_order(&items, camera.view_matrix());

        self.queue.write_buffer(
            &self.scene_buffer,
            0,
            bytemuck::bytes_of(&SceneUniform::new(scene, camera)),
        );

        let stride = self.object_stride as usize;
        let mut objects = vec![0u8; stride * order.len().max(1)];
        for (slot, &index) in order.iter().enumerate() {
            let uniform = ObjectUniform::new(&items[index]);
            let bytes = bytemuck::bytes_of(&uniform);
            objects[slot * stride..slot * stride + bytes.len()].copy_from_slice(bytes);
        }
        self.queue.write_buffer(&self.object_buffer, 0, &objects);

        let mut render_pass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.msaa_view,
                resolve_target: Some(target.view),
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: wgpu::StoreOp::Discard,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.scene_bind_group, &[]);

        for (slot, &index) in order.iter().enumerate() {
            let Some(mesh) = self.meshes.get(&items[index].node) else {
                continue;
            };
            let offset = (slot as u64 * self.object_stride) as u32;
            render_pass.set_bind_group(1, &self.object_bind_group, &[offset]);
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }

        Ok(())
    }
}
