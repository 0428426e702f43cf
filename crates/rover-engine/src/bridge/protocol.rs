/// Shared-buffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Instances: max_instances × 8 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header every frame.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::game::{GameConfig, Rover};
use crate::api::types::GameEvent;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_INSTANCES: usize = 3;
pub const HEADER_INSTANCE_COUNT: usize = 4;
pub const HEADER_MAX_EVENTS: usize = 5;
pub const HEADER_EVENT_COUNT: usize = 6;
pub const HEADER_VIEWPORT_WIDTH: usize = 7;
pub const HEADER_VIEWPORT_HEIGHT: usize = 8;
pub const HEADER_GROUND_LEVEL: usize = 9;
pub const HEADER_POSITION_X: usize = 10;
pub const HEADER_POSITION_Y: usize = 11;
pub const HEADER_FACING: usize = 12;
pub const HEADER_SPRITE_FRAME: usize = 13;
pub const HEADER_JUMP_TICKS: usize = 14;
pub const HEADER_SIMULATION_RATE: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per render instance (fixed wire format).
pub const INSTANCE_FLOATS: usize = RenderInstance::FLOATS;

/// Floats per game event: kind, a, b, c (fixed wire format).
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Largest render-instance capacity a layout accepts.
pub const MAX_INSTANCES: usize = 4096;

/// Largest per-frame event capacity a layout accepts.
pub const MAX_EVENTS: usize = 4096;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum render instances.
    pub max_instances: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values, clamped to
    /// [`MAX_INSTANCES`] and [`MAX_EVENTS`].
    pub fn new(max_instances: usize, max_events: usize) -> Self {
        let max_instances = max_instances.min(MAX_INSTANCES);
        let max_events = max_events.min(MAX_EVENTS);
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let event_data_offset = instance_data_offset + instance_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_events,
            instance_data_floats,
            event_data_floats,
            instance_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_events)
    }

    /// Write one complete frame into `out`, resizing it to the layout.
    /// Instances and events beyond capacity are dropped.
    pub fn pack_frame(
        &self,
        frame_counter: u64,
        rover: &Rover,
        render_buffer: &RenderBuffer,
        out: &mut Vec<f32>,
    ) {
        out.clear();
        out.resize(self.buffer_total_floats, 0.0);

        let instances = &render_buffer.instances[..render_buffer.instances.len().min(self.max_instances)];
        let events = &rover.events()[..rover.events().len().min(self.max_events)];
        if instances.len() < render_buffer.instances.len() || events.len() < rover.events().len() {
            log::warn!(
                "protocol: frame truncated ({} instances, {} events)",
                render_buffer.instances.len(),
                rover.events().len()
            );
        }

        let instance_floats: &[f32] = bytemuck::cast_slice(instances);
        out[self.instance_data_offset..self.instance_data_offset + instance_floats.len()]
            .copy_from_slice(instance_floats);
        let event_floats: &[f32] = bytemuck::cast_slice(events);
        out[self.event_data_offset..self.event_data_offset + event_floats.len()]
            .copy_from_slice(event_floats);

        let controller = rover.controller();
        let viewport = rover.viewport();
        let header = &mut out[..HEADER_FLOATS];
        header[HEADER_LOCK] = 0.0;
        header[HEADER_FRAME_COUNTER] = frame_counter as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        header[HEADER_INSTANCE_COUNT] = instances.len() as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_EVENT_COUNT] = events.len() as f32;
        header[HEADER_VIEWPORT_WIDTH] = viewport.width() as f32;
        header[HEADER_VIEWPORT_HEIGHT] = viewport.height() as f32;
        header[HEADER_GROUND_LEVEL] = viewport.ground_level() as f32;
        header[HEADER_POSITION_X] = controller.position().x as f32;
        header[HEADER_POSITION_Y] = controller.position().y as f32;
        header[HEADER_FACING] = controller.facing().sign();
        header[HEADER_SPRITE_FRAME] = rover.sprite_frame() as f32;
        header[HEADER_JUMP_TICKS] = controller.jump_ticks() as f32;
        header[HEADER_SIMULATION_RATE] = controller.simulation_rate() as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EventKind;
    use crate::input::keys::{key, KeyState};
    use crate::input::queue::InputEvent;
    use crate::systems::render::build_render_buffer;

    fn frame_for(rover: &Rover, layout: &ProtocolLayout) -> Vec<f32> {
        let mut buffer = RenderBuffer::new();
        build_render_buffer(rover, &mut buffer);
        let mut out = Vec::new();
        layout.pack_frame(7, rover, &buffer, &mut out);
        out
    }

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());
        assert_eq!(layout.max_instances, 8);
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.instance_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, HEADER_FLOATS + 8 * 8);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 8 * 8 + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 20);
        assert_eq!(layout.instance_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, layout.instance_data_offset + layout.instance_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn oversized_capacities_are_clamped() {
        let layout = ProtocolLayout::new(usize::MAX / 4, usize::MAX);
        assert_eq!(layout.max_instances, MAX_INSTANCES);
        assert_eq!(layout.max_events, MAX_EVENTS);
        assert_eq!(
            layout.buffer_total_floats,
            HEADER_FLOATS + MAX_INSTANCES * INSTANCE_FLOATS + MAX_EVENTS * EVENT_FLOATS
        );

        let config = GameConfig {
            max_instances: usize::MAX,
            ..GameConfig::default()
        };
        assert_eq!(ProtocolLayout::from_config(&config).max_instances, MAX_INSTANCES);
    }

    #[test]
    fn header_reflects_rover_state() {
        let rover = Rover::new(GameConfig::default());
        let layout = ProtocolLayout::from_config(rover.config());
        let out = frame_for(&rover, &layout);

        assert_eq!(out.len(), layout.buffer_total_floats);
        assert_eq!(out[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(out[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(out[HEADER_INSTANCE_COUNT], 3.0);
        assert_eq!(out[HEADER_EVENT_COUNT], 0.0);
        assert_eq!(out[HEADER_GROUND_LEVEL], 525.0);
        assert_eq!(out[HEADER_POSITION_X], 400.0);
        assert_eq!(out[HEADER_POSITION_Y], 525.0);
        assert_eq!(out[HEADER_FACING], 1.0);
        assert_eq!(out[HEADER_SPRITE_FRAME], 1.0);
        assert_eq!(out[HEADER_SIMULATION_RATE], 30.0);

        // Rover instance is the third one.
        let rover_x = layout.instance_data_offset + 2 * INSTANCE_FLOATS;
        assert_eq!(out[rover_x], 400.0);
        assert_eq!(out[rover_x + 1], 525.0);
    }

    #[test]
    fn events_are_packed_after_instances() {
        let mut rover = Rover::new(GameConfig {
            simulation_rate: 60,
            ..GameConfig::default()
        });
        let mut keys = KeyState::new();
        keys.apply(&InputEvent::KeyDown { key_code: key::SPACE });
        rover.update(&keys, 60);

        let layout = ProtocolLayout::from_config(rover.config());
        let out = frame_for(&rover, &layout);
        assert_eq!(out[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(out[HEADER_JUMP_TICKS], 2.0);
        let e = layout.event_data_offset;
        assert_eq!(out[e], EventKind::JumpStarted as u32 as f32);
        assert_eq!(out[e + 1], 400.0);
        assert_eq!(out[e + 2], 525.0);
    }

    #[test]
    fn overflow_is_truncated_to_capacity() {
        let mut rover = Rover::new(GameConfig {
            max_instances: 3,
            ..GameConfig::default()
        });
        for _ in 0..5 {
            rover.apply_command(crate::input::keys::Command::ToggleDebug);
        }
        let layout = ProtocolLayout::new(2, 3);
        let out = frame_for(&rover, &layout);
        assert_eq!(out.len(), layout.buffer_total_floats);
        assert_eq!(out[HEADER_INSTANCE_COUNT], 2.0);
        assert_eq!(out[HEADER_EVENT_COUNT], 3.0);
    }
}
