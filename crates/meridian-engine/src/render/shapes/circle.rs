use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::CircleCmd;
use crate::scene::{DrawCmd, DrawList};

use super::common::SolidShapePass;

/// Renderer for `DrawCmd::Circle`.
///
/// Fill and stroke are both resolved in one SDF pass; a transparent fill
/// with a stroke draws a ring.
pub struct CircleRenderer {
    pass: SolidShapePass,
    instances: Vec<CircleInstance>,
}

impl Default for CircleRenderer {
    fn default() -> Self {
        Self {
            pass: SolidShapePass::new(
                "meridian circle",
                include_str!("shaders/circle.wgsl"),
                CircleInstance::layout,
            ),
            instances: Vec::new(),
        }
    }
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.instances.clear();
        self.instances.extend(draw_list.iter_in_paint_order().filter_map(|item| match &item.cmd {
            DrawCmd::Circle(cmd) => CircleInstance::from_cmd(cmd),
            _ => None,
        }));

        self.pass.draw(ctx, target, &self.instances);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  center        [f32; 2]   loc 1
///  offset  8  radius_sw     [f32; 2]   loc 2  (.x = radius, .y = stroke width)
///  offset 16  fill          [f32; 4]   loc 3
///  offset 32  stroke_color  [f32; 4]   loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radius_sw: [f32; 2],
    fill: [f32; 4],
    stroke_color: [f32; 4],
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x2, // radius_sw
        3 => Float32x4, // fill
        4 => Float32x4  // stroke_color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// `None` for circles that would cover no pixels.
    fn from_cmd(cmd: &CircleCmd) -> Option<Self> {
        if cmd.radius <= 0.0 || !cmd.center.is_finite() {
            return None;
        }

        let (width, color) = match cmd.stroke {
            Some(s) if s.width > 0.0 => (s.width, s.color.to_array()),
            _ => (0.0, [0.0; 4]),
        };
        if cmd.fill.is_transparent() && width == 0.0 {
            return None;
        }

        Some(Self {
            center: [cmd.center.x, cmd.center.y],
            radius_sw: [cmd.radius, width],
            fill: cmd.fill.to_array(),
            stroke_color: color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::Stroke;

    #[test]
    fn instance_is_48_bytes() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 48);
    }

    #[test]
    fn ring_keeps_stroke_width() {
        let cmd = CircleCmd::new(
            Vec2::new(300.0, 300.0),
            250.0,
            Color::transparent(),
            Some(Stroke::new(5.0, Color::white())),
        );
        let inst = CircleInstance::from_cmd(&cmd).map(|i| i.radius_sw);
        assert_eq!(inst, Some([250.0, 5.0]));
    }

    #[test]
    fn invisible_circles_are_culled() {
        let zero = CircleCmd::new(Vec2::zero(), 0.0, Color::white(), None);
        let clear = CircleCmd::new(Vec2::zero(), 10.0, Color::transparent(), None);
        assert!(CircleInstance::from_cmd(&zero).is_none());
        assert!(CircleInstance::from_cmd(&clear).is_none());
    }
}
