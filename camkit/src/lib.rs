/*!
# camkit

A 3D camera value type and the rendering context it drives.

`Camera3D` is a plain `Copy` value (position, target, up, field of view,
projection). Operations that need renderer-wide state take a
`RenderContext`, which holds the screen size, the active camera control
mode and key bindings, the input snapshot, and the recorded draw commands.

## Architecture

- **Camera3D**: camera fields, accessors and chaining forwarders
- **RenderContext**: 3D scopes, projection queries, control modes, billboards
- **InputState**: keyboard / mouse snapshot, fed from winit events
- **CommandQueue**: draw commands for a backend to consume

```no_run
use camkit::camkit::{Camera3D, CameraMode, Color, RenderContext, Texture2D};
use camkit::glam::Vec3;

let mut ctx = RenderContext::default();
let mut camera = Camera3D::new(Vec3::new(0.0, 2.0, 10.0)).with_fovy(45.0);
let tree = Texture2D::new(1, 64, 128)?;

camera.set_mode(&mut ctx, CameraMode::Orbital);

// every frame
camera.update(&mut ctx);
camera
    .begin_mode(&mut ctx)
    .draw_billboard(&mut ctx, &tree, Vec3::ZERO, 2.0, Color::WHITE)
    .end_mode(&mut ctx);
let _commands = ctx.drain_commands();
ctx.end_frame();
# Ok::<(), camkit::camkit::Error>(())
```
*/

mod error;
pub mod log;
pub mod camera;
pub mod context;
pub mod draw;
pub mod input;
pub mod types;

// Main camkit namespace module
pub mod camkit {
    pub use crate::error::{Error, Result};

    pub use crate::camera::{Camera, Camera3D, CameraProjection, RawCamera3D};
    pub use crate::context::{CameraControls, CameraMode, CameraSettings, ContextConfig, RenderContext};
    pub use crate::input::InputState;
    pub use crate::types::{Color, Matrix, Ray, Rectangle, Texture2D, Vector2, Vector3};

    // Logging types only; the camkit_* macros live at the crate root
    pub mod log {
        pub use crate::log::{
            reset_logger, set_logger, set_min_severity, DefaultLogger, LogEntry, LogSeverity, Logger,
        };
    }

    pub mod draw {
        pub use crate::draw::*;
    }
}

// Re-export math library at crate root
pub use glam;
