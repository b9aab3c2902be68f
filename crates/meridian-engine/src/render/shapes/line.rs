use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::LineCmd;
use crate::scene::{DrawCmd, DrawList, LineCap};

use super::common::SolidShapePass;

/// Renderer for `DrawCmd::Line`.
///
/// Each segment is an oriented quad shaded with a capsule (round cap) or box
/// (butt cap) distance field.
pub struct LineRenderer {
    pass: SolidShapePass,
    instances: Vec<LineInstance>,
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self {
            pass: SolidShapePass::new(
                "meridian line",
                include_str!("shaders/line.wgsl"),
                LineInstance::layout,
            ),
            instances: Vec::new(),
        }
    }
}

impl LineRenderer {
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
            DrawCmd::Line(cmd) => LineInstance::from_cmd(cmd),
            _ => None,
        }));

        self.pass.draw(ctx, target, &self.instances);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (40 bytes):
///
///  offset  0  from     [f32; 2]   loc 1
///  offset  8  to       [f32; 2]   loc 2
///  offset 16  hw_cap   [f32; 2]   loc 3  (.x = half width, .y = 1 for round caps)
///  offset 24  color    [f32; 4]   loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct LineInstance {
    from: [f32; 2],
    to: [f32; 2],
    hw_cap: [f32; 2],
    color: [f32; 4],
}

impl LineInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // from
        2 => Float32x2, // to
        3 => Float32x2, // hw_cap
        4 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    fn from_cmd(cmd: &LineCmd) -> Option<Self> {
        if cmd.width <= 0.0 || cmd.color.is_transparent() {
            return None;
        }
        if !cmd.from.is_finite() || !cmd.to.is_finite() {
            return None;
        }
        // A butt segment of zero length has no area; a round one is a dot.
        if cmd.cap == LineCap::Butt && cmd.length() == 0.0 {
            return None;
        }

        let cap = match cmd.cap {
            LineCap::Butt => 0.0,
            LineCap::Round => 1.0,
        };
        Some(Self {
            from: [cmd.from.x, cmd.from.y],
            to: [cmd.to.x, cmd.to.y],
            hw_cap: [cmd.width * 0.5, cap],
            color: cmd.color.to_array(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn line(from: (f32, f32), to: (f32, f32), width: f32, cap: LineCap) -> LineCmd {
        LineCmd { from: from.into(), to: to.into(), width, color: Color::white(), cap }
    }

    #[test]
    fn instance_is_40_bytes() {
        assert_eq!(std::mem::size_of::<LineInstance>(), 40);
    }

    #[test]
    fn round_cap_flag_and_half_width() {
        let inst = LineInstance::from_cmd(&line((300.0, 300.0), (300.0, 80.0), 8.0, LineCap::Round));
        assert_eq!(inst.map(|i| i.hw_cap), Some([4.0, 1.0]));
    }

    #[test]
    fn round_dot_survives_butt_dot_does_not() {
        let p = (10.0, 10.0);
        assert!(LineInstance::from_cmd(&line(p, p, 4.0, LineCap::Round)).is_some());
        assert!(LineInstance::from_cmd(&line(p, p, 4.0, LineCap::Butt)).is_none());
    }

    #[test]
    fn non_finite_endpoints_are_dropped() {
        let cmd = LineCmd {
            from: Vec2::new(f32::NAN, 0.0),
            to: Vec2::zero(),
            width: 2.0,
            color: Color::white(),
            cap: LineCap::Round,
        };
        assert!(LineInstance::from_cmd(&cmd).is_none());
    }
}
