/// Mock device for unit tests (no GPU required)
///
/// Records every call made by a geometry buffer so tests can check batching,
/// draw order and push/pop balance.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use glam::Mat4;
use rustc_hash::FxHashMap;
use crate::device::{
    GpuTexture, GuiTexture, TextureId, Material, Mesh, MeshVertex,
    BlendMode, PrimitiveMode, RenderContext, RenderEffect, ResourceFactory,
};
use crate::geometry::ClipRect;
use crate::error::{Error, Result};

/// Address of the value behind an `Arc`, used as identity in recorded events
pub fn arc_addr<T: ?Sized>(arc: &Arc<T>) -> usize {
    Arc::as_ptr(arc) as *const () as usize
}

// ============================================================================
// Mock Textures
// ============================================================================

#[derive(Debug)]
pub struct MockGpuTexture {
    pub width: u32,
    pub height: u32,
    pub name: String,
}

impl MockGpuTexture {
    pub fn new(width: u32, height: u32, name: &str) -> Self {
        Self { width, height, name: name.to_string() }
    }
}

impl GpuTexture for MockGpuTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

pub struct MockTexture {
    pub id: TextureId,
    pub gpu: Option<Arc<dyn GpuTexture>>,
}

impl MockTexture {
    /// Texture backed by a 64x64 GPU texture
    pub fn new(name: &str) -> Arc<dyn GuiTexture> {
        Arc::new(Self {
            id: TextureId::new_unique(),
            gpu: Some(Arc::new(MockGpuTexture::new(64, 64, name))),
        })
    }

    /// Texture with nothing loaded yet
    pub fn unloaded() -> Arc<dyn GuiTexture> {
        Arc::new(Self { id: TextureId::new_unique(), gpu: None })
    }
}

impl GuiTexture for MockTexture {
    fn id(&self) -> TextureId {
        self.id
    }

    fn gpu_texture(&self) -> Option<Arc<dyn GpuTexture>> {
        self.gpu.clone()
    }
}

// ============================================================================
// Mock Material
// ============================================================================

struct MockMaterialState {
    blend_mode: BlendMode,
    textures: FxHashMap<String, Arc<dyn GpuTexture>>,
}

pub struct MockMaterial {
    state: Mutex<MockMaterialState>,
}

impl MockMaterial {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockMaterialState {
                blend_mode: BlendMode::None,
                textures: FxHashMap::default(),
            }),
        }
    }
}

impl Material for MockMaterial {
    fn blend_mode(&self) -> BlendMode {
        self.state.lock().unwrap().blend_mode
    }

    fn set_blend_mode(&self, mode: BlendMode) {
        self.state.lock().unwrap().blend_mode = mode;
    }

    fn texture_parameter(&self, name: &str) -> Option<Arc<dyn GpuTexture>> {
        self.state.lock().unwrap().textures.get(name).cloned()
    }

    fn set_texture_parameter(&self, name: &str, texture: Arc<dyn GpuTexture>) {
        self.state.lock().unwrap().textures.insert(name.to_string(), texture);
    }
}

// ============================================================================
// Mock Mesh
// ============================================================================

pub struct MockMesh {
    mode: Mutex<PrimitiveMode>,
    vertices: Mutex<Vec<MeshVertex>>,
    fail_append: AtomicBool,
}

impl MockMesh {
    pub fn new() -> Self {
        Self {
            mode: Mutex::new(PrimitiveMode::Points),
            vertices: Mutex::new(Vec::new()),
            fail_append: AtomicBool::new(false),
        }
    }

    pub fn vertices(&self) -> Vec<MeshVertex> {
        self.vertices.lock().unwrap().clone()
    }
}

impl Mesh for MockMesh {
    fn mode(&self) -> PrimitiveMode {
        *self.mode.lock().unwrap()
    }

    fn set_mode(&self, mode: PrimitiveMode) {
        *self.mode.lock().unwrap() = mode;
    }

    fn append(&self, vertices: &[MeshVertex]) -> Result<()> {
        if self.fail_append.load(Ordering::Relaxed) {
            return Err(Error::OutOfMemory);
        }
        self.vertices.lock().unwrap().extend_from_slice(vertices);
        Ok(())
    }

    fn element_count(&self) -> u32 {
        self.vertices.lock().unwrap().len() as u32
    }
}

// ============================================================================
// Mock ResourceFactory
// ============================================================================

/// Factory handing out mock materials and meshes
///
/// Keeps concrete handles to everything it created so tests can inspect
/// vertex contents without downcasting.
pub struct MockResourceFactory {
    pub materials_created: AtomicU32,
    pub meshes_created: AtomicU32,
    pub fail_materials: AtomicBool,
    pub fail_meshes: AtomicBool,
    pub fail_mesh_append: AtomicBool,
    meshes: Mutex<Vec<Arc<MockMesh>>>,
}

impl MockResourceFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            materials_created: AtomicU32::new(0),
            meshes_created: AtomicU32::new(0),
            fail_materials: AtomicBool::new(false),
            fail_meshes: AtomicBool::new(false),
            fail_mesh_append: AtomicBool::new(false),
            meshes: Mutex::new(Vec::new()),
        })
    }

    /// Concrete mesh behind a trait object handed out by this factory
    pub fn mock_mesh(&self, mesh: &Arc<dyn Mesh>) -> Option<Arc<MockMesh>> {
        let addr = arc_addr(mesh);
        self.meshes.lock().unwrap()
            .iter()
            .find(|m| arc_addr(*m) == addr)
            .cloned()
    }

    pub fn materials_created(&self) -> u32 {
        self.materials_created.load(Ordering::Relaxed)
    }

    pub fn meshes_created(&self) -> u32 {
        self.meshes_created.load(Ordering::Relaxed)
    }
}

impl ResourceFactory for MockResourceFactory {
    fn create_material(&self) -> Result<Arc<dyn Material>> {
        if self.fail_materials.load(Ordering::Relaxed) {
            return Err(Error::OutOfMemory);
        }
        self.materials_created.fetch_add(1, Ordering::Relaxed);
        Ok(Arc::new(MockMaterial::new()))
    }

    fn create_mesh(&self) -> Result<Arc<dyn Mesh>> {
        if self.fail_meshes.load(Ordering::Relaxed) {
            return Err(Error::OutOfMemory);
        }
        self.meshes_created.fetch_add(1, Ordering::Relaxed);
        let mesh = Arc::new(MockMesh::new());
        mesh.fail_append.store(self.fail_mesh_append.load(Ordering::Relaxed), Ordering::Relaxed);
        self.meshes.lock().unwrap().push(Arc::clone(&mesh));
        Ok(mesh)
    }
}

// ============================================================================
// Mock RenderContext
// ============================================================================

/// Event recorded by the mock context and mock effect
#[derive(Debug, Clone, PartialEq)]
pub enum MockEvent {
    PushWorld,
    MultiplyWorld(Mat4),
    PopWorld,
    PushClip(ClipRect),
    PopClip,
    Render { material: usize, mesh: usize },
    PreRender(u32),
    PostRender,
}

pub type MockEventLog = Arc<Mutex<Vec<MockEvent>>>;

pub struct MockRenderContext {
    pub events: MockEventLog,
    pub world_depth: i32,
    pub clip_depth: i32,
    /// Fail the n-th (0-based) render_material call
    pub fail_render_at: Option<usize>,
    /// Fail push_clip_rect
    pub fail_push_clip: bool,
    renders: usize,
}

impl MockRenderContext {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            world_depth: 0,
            clip_depth: 0,
            fail_render_at: None,
            fail_push_clip: false,
            renders: 0,
        }
    }

    pub fn events(&self) -> Vec<MockEvent> {
        self.events.lock().unwrap().clone()
    }

    /// (material, mesh) addresses of every draw call, in order
    pub fn renders(&self) -> Vec<(usize, usize)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                MockEvent::Render { material, mesh } => Some((material, mesh)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.lock().unwrap().clear();
        self.renders = 0;
    }

    fn record(&self, event: MockEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl RenderContext for MockRenderContext {
    fn push_world_matrix(&mut self) -> Result<()> {
        self.world_depth += 1;
        self.record(MockEvent::PushWorld);
        Ok(())
    }

    fn multiply_world_matrix(&mut self, matrix: &Mat4) -> Result<()> {
        self.record(MockEvent::MultiplyWorld(*matrix));
        Ok(())
    }

    fn pop_world_matrix(&mut self) -> Result<()> {
        self.world_depth -= 1;
        self.record(MockEvent::PopWorld);
        Ok(())
    }

    fn push_clip_rect(&mut self, rect: ClipRect) -> Result<()> {
        if self.fail_push_clip {
            return Err(Error::BackendError("clip stack full".to_string()));
        }
        self.clip_depth += 1;
        self.record(MockEvent::PushClip(rect));
        Ok(())
    }

    fn pop_clip_rect(&mut self) -> Result<()> {
        self.clip_depth -= 1;
        self.record(MockEvent::PopClip);
        Ok(())
    }

    fn render_material(&mut self, material: &Arc<dyn Material>, mesh: &Arc<dyn Mesh>) -> Result<()> {
        let index = self.renders;
        self.renders += 1;
        if self.fail_render_at == Some(index) {
            return Err(Error::BackendError(format!("draw call {} rejected", index)));
        }
        self.record(MockEvent::Render { material: arc_addr(material), mesh: arc_addr(mesh) });
        Ok(())
    }
}

// ============================================================================
// Mock RenderEffect
// ============================================================================

pub struct MockRenderEffect {
    pub passes: u32,
    pub events: MockEventLog,
}

impl MockRenderEffect {
    /// Effect recording its hooks into the context's event log
    pub fn new(passes: u32, ctx: &MockRenderContext) -> Self {
        Self { passes, events: Arc::clone(&ctx.events) }
    }
}

impl RenderEffect for MockRenderEffect {
    fn pass_count(&self) -> u32 {
        self.passes
    }

    fn perform_pre_render(&self, pass: u32, _ctx: &mut dyn RenderContext) -> Result<()> {
        self.events.lock().unwrap().push(MockEvent::PreRender(pass));
        Ok(())
    }

    fn perform_post_render(&self, _ctx: &mut dyn RenderContext) -> Result<()> {
        self.events.lock().unwrap().push(MockEvent::PostRender);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_device_tests.rs"]
mod tests;
