use crate::api::game::Rover;
use crate::components::layer::RenderLayer;
use crate::components::sprite::{SpriteComponent, SpriteId};
use crate::renderer::instance::{Anchor, RenderBuffer, RenderInstance};

/// Build the render buffer for one display tick.
///
/// Draw order: two background tiles covering the viewport at the current
/// scroll offset, then the rover at the horizontal center of the screen.
pub fn build_render_buffer(rover: &Rover, buffer: &mut RenderBuffer) {
    buffer.clear();

    let viewport = rover.viewport();
    let state = rover.controller().state();
    let width = viewport.width() as f32;
    let height = viewport.height() as f32;

    let offset = viewport.scroll_offset(state.position().x) as f32;
    for x in [offset, offset + width] {
        buffer.push(RenderInstance {
            x,
            y: 0.0,
            scale_x: width,
            scale_y: height,
            sprite: SpriteId::BACKGROUND.0 as f32,
            layer: RenderLayer::Background.as_u8() as f32,
            alpha: 1.0,
            anchor: Anchor::TopLeft as u32 as f32,
        });
    }

    let sprite = SpriteComponent::new(SpriteId(rover.sprite_frame()), state.facing());
    buffer.push(RenderInstance {
        x: viewport.center_x() as f32,
        y: state.position().y as f32,
        scale_x: sprite.scale_x(),
        scale_y: sprite.scale_y(),
        sprite: sprite.sprite.0 as f32,
        layer: RenderLayer::Actors.as_u8() as f32,
        alpha: sprite.alpha,
        anchor: Anchor::Center as u32 as f32,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::game::GameConfig;
    use crate::input::keys::{key, KeyState};
    use crate::input::queue::InputEvent;

    fn rover_at_full_rate() -> Rover {
        Rover::new(GameConfig {
            simulation_rate: 60,
            ..GameConfig::default()
        })
    }

    fn hold(key_code: u32) -> KeyState {
        let mut keys = KeyState::new();
        keys.apply(&InputEvent::KeyDown { key_code });
        keys
    }

    #[test]
    fn initial_frame_layout() {
        let rover = rover_at_full_rate();
        let mut buffer = RenderBuffer::new();
        build_render_buffer(&rover, &mut buffer);

        assert_eq!(buffer.instance_count(), 3);
        let [bg1, bg2, hero] = [buffer.instances[0], buffer.instances[1], buffer.instances[2]];
        // World x starts at the viewport center.
        assert_eq!((bg1.x, bg2.x), (-400.0, 400.0));
        assert_eq!((bg1.scale_x, bg1.scale_y), (800.0, 600.0));
        assert_eq!(bg1.layer, 0.0);
        assert_eq!((hero.x, hero.y), (400.0, 525.0));
        assert_eq!(hero.sprite, 1.0);
        assert_eq!(hero.scale_x, 0.5);
        assert_eq!(hero.anchor, 1.0);
    }

    #[test]
    fn background_scrolls_opposite_to_motion() {
        let mut rover = rover_at_full_rate();
        let keys = hold(key::ARROW_RIGHT);
        rover.update(&keys, 60);
        let mut buffer = RenderBuffer::new();
        build_render_buffer(&rover, &mut buffer);
        assert_eq!(buffer.instances[0].x, -415.0);
        assert_eq!(buffer.instances[1].x, 385.0);
        assert_eq!(buffer.instances[2].sprite, 2.0);
    }

    #[test]
    fn left_motion_mirrors_and_wraps_background() {
        let mut rover = rover_at_full_rate();
        let keys = hold(key::ARROW_LEFT);
        // 400 - 30 * 15 = -50
        for _ in 0..30 {
            rover.update(&keys, 60);
        }
        let mut buffer = RenderBuffer::new();
        build_render_buffer(&rover, &mut buffer);
        assert_eq!(buffer.instances[0].x, -750.0);
        assert_eq!(buffer.instances[1].x, 50.0);
        assert_eq!(buffer.instances[2].scale_x, -0.5);
        // frame 30 -> 30 % 4 + 1
        assert_eq!(buffer.instances[2].sprite, 3.0);
    }
}
