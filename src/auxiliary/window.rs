use winit::dpi::{LogicalPosition, LogicalSize, PhysicalSize};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

/// Pixel-buffer dimensions. One automaton cell maps to one pixel, so
/// these are also the grid dimensions the viewer expects.
pub const SCREEN_WIDTH: u32 = 120;
pub const SCREEN_HEIGHT: u32 = 90;

/// Creates a window sized to the monitor, centered, with the pixel
/// buffer scaled up to roughly two thirds of the screen height.
/// Returns the window, its physical surface size, and the DPI factor.
pub fn create_window(title: &str, event_loop: &EventLoop<()>) -> (Window, u32, u32, f64) {
    // Start hidden so we can size the window from the monitor first.
    let window = WindowBuilder::new()
        .with_visible(false)
        .with_title(title)
        .build(event_loop)
        .expect("failed to build window");
    let hidpi_factor = window.scale_factor();

    let width = SCREEN_WIDTH as f64;
    let height = SCREEN_HEIGHT as f64;
    let (monitor_width, monitor_height) = {
        if let Some(monitor) = window.current_monitor() {
            let size = monitor.size().to_logical(hidpi_factor);
            (size.width, size.height)
        } else {
            (width, height)
        }
    };
    let scale = (monitor_height / height * 2.0 / 3.0).round().max(1.0);

    let min_size: LogicalSize<f64> = PhysicalSize::new(width, height).to_logical(hidpi_factor);
    let default_size = LogicalSize::new(width * scale, height * scale);
    let center = LogicalPosition::new(
        (monitor_width - width * scale) / 2.0,
        (monitor_height - height * scale) / 2.0,
    );
    window.set_inner_size(default_size);
    window.set_min_inner_size(Some(min_size));
    window.set_outer_position(center);
    window.set_visible(true);

    let size = default_size.to_physical::<f64>(hidpi_factor);

    (
        window,
        size.width.round() as u32,
        size.height.round() as u32,
        hidpi_factor,
    )
}
