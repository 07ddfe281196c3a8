use super::ScreenVertex;
use crate::render::framebuffer::FrameBuffer;

/// Draws a line between two points using Bresenham's line algorithm with
/// depth testing.
///
/// Bresenham's algorithm tracks an integer "error" term: the distance between
/// the ideal line and the current pixel. For each step along the major axis
/// it decides from the accumulated error whether to also step along the minor
/// axis, so `max(|dx|, |dy|)` steps reach the end point.
///
/// Depth and color are interpolated by progress along the full line on its
/// dominant axis. Color interpolation covers R, G and B; alpha is fully opaque.
///
/// Lines whose endpoints both lie beyond the buffer in |x| and both beyond it
/// in |y| are skipped up front. This is a cheap cull, not clipping. The walk
/// itself is clipped to the buffer (plus a one pixel margin), so endpoints
/// anywhere in the `i32` range cost at most a buffer's worth of steps.
pub fn draw_line(buffer: &mut FrameBuffer, from: ScreenVertex, to: ScreenVertex) {
    let (width, height) = (buffer.width() as i64, buffer.height() as i64);
    let (x0, y0, x1, y1) = (from.x as i64, from.y as i64, to.x as i64, to.y as i64);
    if x0.abs().min(x1.abs()) > width && y0.abs().min(y1.abs()) > height {
        return;
    }

    let Some((t0, t1)) = clip_to_buffer([x0, y0], [x1, y1], width, height) else {
        return;
    };
    let (full_dx, full_dy) = ((x1 - x0) as f64, (y1 - y0) as f64);
    let (start_x, start_y) = (
        (x0 as f64 + full_dx * t0).round() as i64,
        (y0 as f64 + full_dy * t0).round() as i64,
    );
    let (end_x, end_y) = (
        (x0 as f64 + full_dx * t1).round() as i64,
        (y0 as f64 + full_dy * t1).round() as i64,
    );

    let dz = to.z - from.z;
    let plot = |buffer: &mut FrameBuffer, x: i64, y: i64, local: f64| {
        let gradient = (t0 + (t1 - t0) * local) as f32;
        let z = from.z + dz * gradient;
        let color = from.color.lerp(to.color, gradient);
        // Clipped coordinates lie within one pixel of the buffer.
        buffer.draw_point(x as i32, y as i32, z, color);
    };

    let dx = (end_x - start_x).abs();
    let dy = (end_y - start_y).abs();

    if dx == 0 && dy == 0 {
        plot(buffer, start_x, start_y, 0.0);
        return;
    }

    let x_incr_direction = if start_x < end_x { 1 } else { -1 };
    let y_incr_direction = if start_y < end_y { 1 } else { -1 };

    let mut err = dx - dy;
    let mut x = start_x;
    let mut y = start_y;

    loop {
        let local = if dx > dy {
            (x - start_x).abs() as f64 / dx as f64
        } else {
            (y - start_y).abs() as f64 / dy as f64
        };
        plot(buffer, x, y, local);

        if x == end_x && y == end_y {
            break;
        }

        // Doubled error avoids a fractional comparison.
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += x_incr_direction;
        }
        // Both branches may fire: a diagonal step.
        if e2 < dx {
            err += dx;
            y += y_incr_direction;
        }
    }
}

/// Liang-Barsky clip of the segment `from -> to` against `[-1, width] x
/// [-1, height]`. Returns the visible parameter range, or `None` if the
/// segment misses the region. A segment already inside yields `(0, 1)`.
fn clip_to_buffer(from: [i64; 2], to: [i64; 2], width: i64, height: i64) -> Option<(f64, f64)> {
    let (x0, y0) = (from[0] as f64, from[1] as f64);
    let (dx, dy) = ((to[0] - from[0]) as f64, (to[1] - from[1]) as f64);
    let (min, max_x, max_y) = (-1.0, width as f64, height as f64);

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-dx, x0 - min),
        (dx, max_x - x0),
        (-dy, y0 - min),
        (dy, max_y - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }
    Some((t0, t1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;
    use approx::assert_relative_eq;

    fn plotted(fb: &FrameBuffer) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        for y in 0..fb.height() as i32 {
            for x in 0..fb.width() as i32 {
                if fb.depth_at(x, y).is_some_and(f32::is_finite) {
                    points.push((x, y));
                }
            }
        }
        points
    }

    #[test]
    fn horizontal_line_interpolates_depth_and_color() {
        let mut fb = FrameBuffer::new(8, 4, Color::BLACK);
        draw_line(
            &mut fb,
            ScreenVertex::new(0, 0, 0.0, Color::RED),
            ScreenVertex::new(4, 0, 4.0, Color::BLUE),
        );

        assert_eq!(plotted(&fb), vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        for x in 0..=4 {
            assert_relative_eq!(fb.depth_at(x, 0).unwrap(), x as f32);
            let t = x as f32 / 4.0;
            assert_eq!(fb.get_pixel(x, 0), Some(Color::RED.lerp(Color::BLUE, t)));
        }
        assert_eq!(fb.get_pixel(2, 0), Some(Color::rgb(128, 0, 128)));
    }

    #[test]
    fn steep_line_steps_along_y() {
        let mut fb = FrameBuffer::new(8, 8, Color::BLACK);
        draw_line(
            &mut fb,
            ScreenVertex::new(1, 6, 6.0, Color::WHITE),
            ScreenVertex::new(3, 0, 0.0, Color::WHITE),
        );
        let points = plotted(&fb);
        assert_eq!(points.len(), 7);
        for y in 0..=6 {
            assert_eq!(points.iter().filter(|p| p.1 == y).count(), 1);
            let (x, _) = *points.iter().find(|p| p.1 == y).unwrap();
            assert_relative_eq!(fb.depth_at(x, y).unwrap(), y as f32, epsilon = 1e-6);
        }
    }

    #[test]
    fn diagonal_line_hits_every_step() {
        let mut fb = FrameBuffer::new(5, 5, Color::BLACK);
        draw_line(
            &mut fb,
            ScreenVertex::new(4, 4, 1.0, Color::WHITE),
            ScreenVertex::new(0, 0, 1.0, Color::WHITE),
        );
        assert_eq!(plotted(&fb), (0..5).map(|i| (i, i)).collect::<Vec<_>>());
    }

    #[test]
    fn zero_length_line_draws_one_point() {
        let mut fb = FrameBuffer::new(4, 4, Color::BLACK);
        draw_line(
            &mut fb,
            ScreenVertex::new(2, 2, 0.5, Color::RED),
            ScreenVertex::new(2, 2, 0.9, Color::BLUE),
        );
        assert_eq!(plotted(&fb), vec![(2, 2)]);
        assert_eq!(fb.get_pixel(2, 2), Some(Color::RED));
    }

    #[test]
    fn line_far_outside_is_culled() {
        let mut fb = FrameBuffer::new(4, 4, Color::BLACK);
        draw_line(
            &mut fb,
            ScreenVertex::new(-10, 10, 0.0, Color::RED),
            ScreenVertex::new(20, -20, 0.0, Color::RED),
        );
        assert!(plotted(&fb).is_empty());
    }

    #[test]
    fn partially_visible_line_is_clipped_per_pixel() {
        let mut fb = FrameBuffer::new(4, 4, Color::BLACK);
        draw_line(
            &mut fb,
            ScreenVertex::new(-2, 1, 0.0, Color::RED),
            ScreenVertex::new(6, 1, 0.0, Color::RED),
        );
        assert_eq!(plotted(&fb), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn endpoint_at_i32_min_is_clipped() {
        let mut fb = FrameBuffer::new(4, 4, Color::BLACK);
        draw_line(
            &mut fb,
            ScreenVertex::new(i32::MIN, 2, 0.0, Color::RED),
            ScreenVertex::new(3, 2, 0.0, Color::RED),
        );
        assert_eq!(plotted(&fb), vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn endpoint_at_i32_max_is_clipped() {
        let mut fb = FrameBuffer::new(4, 4, Color::BLACK);
        draw_line(
            &mut fb,
            ScreenVertex::new(i32::MAX, 1, 0.0, Color::BLUE),
            ScreenVertex::new(0, 1, 0.0, Color::BLUE),
        );
        assert_eq!(plotted(&fb), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn line_spanning_whole_i32_range_crosses_once() {
        let mut fb = FrameBuffer::new(4, 4, Color::BLACK);
        draw_line(
            &mut fb,
            ScreenVertex::new(i32::MIN, 0, 0.0, Color::WHITE),
            ScreenVertex::new(i32::MAX, 3, 0.0, Color::WHITE),
        );
        let points = plotted(&fb);
        let mut columns: Vec<i32> = points.iter().map(|p| p.0).collect();
        columns.sort_unstable();
        assert_eq!(columns, vec![0, 1, 2, 3]);
        assert!(points.iter().all(|p| p.1 == 1 || p.1 == 2));
    }

    #[test]
    fn clipped_line_keeps_depth_of_full_line() {
        let mut fb = FrameBuffer::new(4, 2, Color::BLACK);
        draw_line(
            &mut fb,
            ScreenVertex::new(-4, 0, 0.0, Color::WHITE),
            ScreenVertex::new(4, 0, 8.0, Color::WHITE),
        );
        assert_eq!(plotted(&fb), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        for x in 0..4 {
            assert_relative_eq!(fb.depth_at(x, 0).unwrap(), x as f32 + 4.0, epsilon = 1e-5);
        }
    }
}
