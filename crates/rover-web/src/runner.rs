use rover_engine::{
    build_render_buffer, overlay_lines, GameConfig, InputEvent, InputQueue, KeyState,
    ProtocolLayout, RenderBuffer, Rover,
};

/// Wires the rover simulation to a browser host.
///
/// The host pushes input events as they arrive and calls `tick` once per
/// display refresh with its refresh rate. After each tick the whole frame
/// (header, instances, events) sits in one flat `f32` buffer for
/// SharedArrayBuffer reads.
pub struct GameRunner {
    game: Rover,
    input: InputQueue,
    keys: KeyState,
    render_buffer: RenderBuffer,
    layout: ProtocolLayout,
    frame: Vec<f32>,
    frame_counter: u64,
    initialized: bool,
}

impl GameRunner {
    pub fn new(config: GameConfig) -> Self {
        let game = Rover::new(config);
        let layout = ProtocolLayout::from_config(game.config());
        let render_buffer = RenderBuffer::with_capacity(layout.max_instances);
        let frame = vec![0.0; layout.buffer_total_floats];

        Self {
            game,
            input: InputQueue::new(),
            keys: KeyState::new(),
            render_buffer,
            layout,
            frame,
            frame_counter: 0,
            initialized: false,
        }
    }

    /// Initialize the runner. Call once after construction.
    pub fn init(&mut self) {
        self.initialized = true;
        self.publish();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one display tick: fold input, update the game, publish the frame.
    pub fn tick(&mut self, display_rate: u32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.game.clear_frame_data();

        for event in self.input.drain() {
            match event {
                InputEvent::Resize { width, height } => self.game.resize(width, height),
                other => self.keys.apply(&other),
            }
        }

        self.game.update(&self.keys, display_rate);
        self.keys.end_frame();

        self.frame_counter += 1;
        self.publish();
    }

    fn publish(&mut self) {
        build_render_buffer(&self.game, &mut self.render_buffer);
        self.layout
            .pack_frame(self.frame_counter, &self.game, &self.render_buffer, &mut self.frame);
    }

    pub fn game(&self) -> &Rover {
        &self.game
    }

    pub fn frame(&self) -> &[f32] {
        &self.frame
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn instance_data_offset(&self) -> u32 {
        self.layout.instance_data_offset as u32
    }

    pub fn event_data_offset(&self) -> u32 {
        self.layout.event_data_offset as u32
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count().min(self.layout.max_instances as u32)
    }

    pub fn event_count(&self) -> u32 {
        self.game.events().len().min(self.layout.max_events) as u32
    }

    // ---- Scalar accessors ----

    pub fn world_width(&self) -> f32 {
        self.game.viewport().width() as f32
    }

    pub fn world_height(&self) -> f32 {
        self.game.viewport().height() as f32
    }

    pub fn simulation_rate(&self) -> u32 {
        self.game.controller().simulation_rate()
    }

    /// Debug overlay text, one line per entry. Empty when debug is off.
    pub fn debug_text(&self) -> String {
        overlay_lines(&self.game).join("\n")
    }
}
