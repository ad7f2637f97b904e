/// GeometryBuffer - per-widget vertex batching and replay.
///
/// Vertices are appended under an "active texture". Consecutive vertices with
/// the same texture accumulate in one batch; switching texture starts a new
/// batch. Materials are shared between all batches of a texture, so a texture
/// that comes back after another one gets a new mesh but reuses its material.
///
/// Drawing pushes the buffer's transform and clip rectangle onto the render
/// context, replays every batch in submission order once per render-effect
/// pass, and pops everything it pushed.

use std::sync::{Arc, Weak};
use glam::Vec3;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::device::{
    GuiTexture, TextureId, Material, Mesh, MeshVertex, Vertex,
    BlendMode, PrimitiveMode, DEFAULT_TEXTURE_PARAMETER,
    ResourceFactory, RenderContext, RenderEffect,
};
use crate::{engine_debug, engine_error, engine_trace, engine_warn};
use super::{Batch, ClipRect, Rect, Transform};

const SOURCE: &str = "galaxy3d::gui::GeometryBuffer";

// ===== CONFIG =====

/// How a geometry buffer configures the resources it creates
#[derive(Debug, Clone)]
pub struct GeometryBufferConfig {
    /// Blend mode of every material created
    pub blend_mode: BlendMode,
    /// Material parameter the texture is bound to
    pub texture_parameter: String,
    /// Primitive mode of every mesh created
    pub primitive_mode: PrimitiveMode,
}

impl Default for GeometryBufferConfig {
    fn default() -> Self {
        Self {
            blend_mode: BlendMode::Alpha,
            texture_parameter: DEFAULT_TEXTURE_PARAMETER.to_string(),
            primitive_mode: PrimitiveMode::Triangles,
        }
    }
}

// ===== STATS =====

/// What a single `draw` call did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Render-effect passes executed
    pub passes: u32,
    /// Draw calls issued across all passes
    pub draw_calls: u32,
    /// Whether a clip rectangle was pushed
    pub clipped: bool,
}

// ===== GEOMETRY BUFFER =====

/// Batched GUI geometry with its own transform, clip rectangle and effect
pub struct GeometryBuffer {
    factory: Arc<dyn ResourceFactory>,
    config: GeometryBufferConfig,
    /// Draw order
    batches: Vec<Batch>,
    texture_materials: FxHashMap<TextureId, Arc<dyn Material>>,
    active_texture: Option<Weak<dyn GuiTexture>>,
    effect: Option<Arc<dyn RenderEffect>>,
    transform: Transform,
    clip_rect: ClipRect,
}

impl GeometryBuffer {
    /// Create an empty buffer with the default configuration
    pub fn new(factory: Arc<dyn ResourceFactory>) -> Self {
        Self::with_config(factory, GeometryBufferConfig::default())
    }

    /// Create an empty buffer
    pub fn with_config(factory: Arc<dyn ResourceFactory>, config: GeometryBufferConfig) -> Self {
        Self {
            factory,
            config,
            batches: Vec::new(),
            texture_materials: FxHashMap::default(),
            active_texture: None,
            effect: None,
            transform: Transform::new(),
            clip_rect: ClipRect::NONE,
        }
    }

    pub fn config(&self) -> &GeometryBufferConfig {
        &self.config
    }

    // ===== GEOMETRY =====

    /// Append a single vertex
    pub fn append_vertex(&mut self, vertex: &Vertex) -> Result<()> {
        self.append_vertices(std::slice::from_ref(vertex))
    }

    /// Append vertices, in order, to the batch of the active texture
    ///
    /// Without a live active texture the vertices are dropped and `Ok(())` is
    /// returned. Errors only come from the resource factory or the mesh.
    pub fn append_vertices(&mut self, vertices: &[Vertex]) -> Result<()> {
        if vertices.is_empty() {
            return Ok(());
        }

        let Some(mesh) = self.pick_mesh()? else {
            engine_trace!(SOURCE, "No active texture, dropped {} vertices", vertices.len());
            return Ok(());
        };

        let records: Vec<MeshVertex> = vertices.iter().map(MeshVertex::from).collect();
        mesh.append(&records)
    }

    /// Mesh the next vertices go to, creating a batch when needed
    fn pick_mesh(&mut self) -> Result<Option<Arc<dyn Mesh>>> {
        let texture = match self.active_texture.as_ref() {
            None => return Ok(None),
            Some(weak) => match weak.upgrade() {
                Some(texture) => texture,
                None => {
                    engine_warn!(SOURCE, "Active texture was destroyed, geometry dropped");
                    return Ok(None);
                }
            },
        };

        let texture_id = texture.id();
        let material = match self.texture_materials.get(&texture_id).cloned() {
            Some(material) => {
                if let Some(last) = self.batches.last() {
                    if last.uses_material(&material) {
                        return Ok(Some(Arc::clone(last.mesh())));
                    }
                }
                engine_trace!(SOURCE, "Texture {} resumed, splitting into batch {}",
                    texture_id.raw(), self.batches.len());
                material
            }
            None => {
                let material = self.create_material(texture.as_ref())?;
                self.texture_materials.insert(texture_id, Arc::clone(&material));
                engine_trace!(SOURCE, "Texture {} first used, new material for batch {}",
                    texture_id.raw(), self.batches.len());
                material
            }
        };

        let mesh = self.factory.create_mesh()?;
        mesh.set_mode(self.config.primitive_mode);
        self.batches.push(Batch::new(material, Arc::clone(&mesh)));
        Ok(Some(mesh))
    }

    /// New material configured for `texture`, not shared yet
    fn create_material(&self, texture: &dyn GuiTexture) -> Result<Arc<dyn Material>> {
        let material = self.factory.create_material()?;
        material.set_blend_mode(self.config.blend_mode);
        if let Some(gpu_texture) = texture.gpu_texture() {
            material.set_texture_parameter(&self.config.texture_parameter, gpu_texture);
        }
        Ok(material)
    }

    /// Release every batch and forget the active texture
    ///
    /// Transform, clip rectangle and render effect are kept.
    pub fn reset(&mut self) {
        if !self.batches.is_empty() {
            engine_debug!(SOURCE, "Reset: releasing {} batches ({} materials)",
                self.batches.len(), self.texture_materials.len());
        }
        self.batches.clear();
        self.texture_materials.clear();
        self.active_texture = None;
    }

    // ===== ACTIVE TEXTURE =====

    /// Set the texture subsequent vertices are drawn with
    ///
    /// Only a weak reference is kept.
    pub fn set_active_texture(&mut self, texture: Option<&Arc<dyn GuiTexture>>) {
        self.active_texture = texture.map(Arc::downgrade);
    }

    /// Active texture, if set and still alive
    pub fn active_texture(&self) -> Option<Arc<dyn GuiTexture>> {
        self.active_texture.as_ref().and_then(Weak::upgrade)
    }

    // ===== QUERIES =====

    /// Total vertices across all batches
    pub fn vertex_count(&self) -> u32 {
        self.batches.iter().map(|batch| batch.mesh().element_count()).sum()
    }

    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Batches in draw order
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    // ===== TRANSFORM =====

    pub fn set_translation(&mut self, translation: Vec3) {
        self.transform.set_translation(translation);
    }

    /// Set the rotation in degrees about X, Y and Z
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.transform.set_rotation(rotation);
    }

    pub fn set_pivot(&mut self, pivot: Vec3) {
        self.transform.set_pivot(pivot);
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    // ===== CLIPPING =====

    /// Clip subsequent draws to `region`, pixel-aligned and clamped to the screen
    pub fn set_clipping_region(&mut self, region: &Rect) {
        self.clip_rect = ClipRect::from_region(region);
    }

    pub fn clip_rect(&self) -> ClipRect {
        self.clip_rect
    }

    // ===== RENDER EFFECT =====

    pub fn set_render_effect(&mut self, effect: Option<Arc<dyn RenderEffect>>) {
        self.effect = effect;
    }

    pub fn render_effect(&self) -> Option<&Arc<dyn RenderEffect>> {
        self.effect.as_ref()
    }

    // ===== DRAW =====

    /// Draw every batch into `ctx`
    ///
    /// Whatever happens, each push made on `ctx` is popped before returning.
    /// The first collaborator error, if any, is returned.
    pub fn draw(&mut self, ctx: &mut dyn RenderContext) -> Result<DrawStats> {
        let matrix = *self.transform.matrix();

        ctx.push_world_matrix()?;
        let result = ctx.multiply_world_matrix(&matrix)
            .and_then(|()| self.draw_clipped(ctx));
        let popped = ctx.pop_world_matrix();

        if let Err(err) = &result {
            engine_error!(SOURCE, "Draw of {} batches failed: {}", self.batches.len(), err);
        }
        let stats = result?;
        popped?;
        Ok(stats)
    }

    fn draw_clipped(&self, ctx: &mut dyn RenderContext) -> Result<DrawStats> {
        if !self.clip_rect.is_enabled() {
            return self.draw_passes(ctx);
        }

        ctx.push_clip_rect(self.clip_rect)?;
        let result = self.draw_passes(ctx);
        let popped = ctx.pop_clip_rect();

        let stats = result?;
        popped?;
        Ok(DrawStats { clipped: true, ..stats })
    }

    fn draw_passes(&self, ctx: &mut dyn RenderContext) -> Result<DrawStats> {
        let pass_count = self.effect.as_ref().map_or(1, |effect| effect.pass_count());
        let mut stats = DrawStats::default();

        for pass in 0..pass_count {
            if let Some(effect) = &self.effect {
                effect.perform_pre_render(pass, ctx)?;
            }
            for batch in &self.batches {
                ctx.render_material(batch.material(), batch.mesh())?;
                stats.draw_calls += 1;
            }
            stats.passes += 1;
        }

        if let Some(effect) = &self.effect {
            effect.perform_post_render(ctx)?;
        }

        Ok(stats)
    }
}

#[cfg(test)]
#[path = "geometry_buffer_tests.rs"]
mod tests;
