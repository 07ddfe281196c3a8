use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gouraud::colors::Color;
use gouraud::math::Vec3;
use gouraud::mesh::TriangleMesh;
use gouraud::render::{
    draw_line, FrameBuffer, Rasterizer, ScanlineRasterizer, ScreenTriangle, ScreenVertex,
};
use gouraud::{Engine, RenderConfig};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn create_buffer() -> FrameBuffer {
    FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT, Color::BLACK)
}

fn triangle(points: [(i32, i32); 3]) -> ScreenTriangle {
    let colors = [Color::RED, Color::GREEN, Color::BLUE];
    [0, 1, 2].map(|i| ScreenVertex::new(points[i].0, points[i].1, 0.5, colors[i]))
}

fn small_triangle() -> ScreenTriangle {
    triangle([(100, 100), (120, 100), (110, 120)])
}

fn medium_triangle() -> ScreenTriangle {
    triangle([(100, 100), (300, 100), (200, 300)])
}

fn large_triangle() -> ScreenTriangle {
    triangle([(50, 50), (750, 100), (400, 550)])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let scanline = ScanlineRasterizer::new();

    for (name, tri) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &tri, |b, tri| {
            let mut fb = create_buffer();
            b.iter(|| {
                fb.clear(Color::BLACK);
                scanline.fill_triangle(black_box(tri), &mut fb);
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let scanline = ScanlineRasterizer::new();

    // Generate a grid of small triangles
    let triangles: Vec<ScreenTriangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col * 40;
                let y = row * 30;
                triangle([(x, y), (x + 35, y), (x + 17, y + 25)])
            })
        })
        .collect();

    c.bench_function("scanline_400_triangles", |b| {
        let mut fb = create_buffer();
        b.iter(|| {
            fb.clear(Color::BLACK);
            for tri in &triangles {
                scanline.fill_triangle(black_box(tri), &mut fb);
            }
        });
    });
}

fn benchmark_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");

    for (name, to) in [("shallow", (790, 300)), ("steep", (420, 590)), ("diagonal", (590, 590))] {
        group.bench_function(name, |b| {
            let mut fb = create_buffer();
            let from = ScreenVertex::new(10, 10, 0.0, Color::RED);
            let to = ScreenVertex::new(to.0, to.1, 1.0, Color::BLUE);
            b.iter(|| {
                fb.clear(Color::BLACK);
                draw_line(&mut fb, black_box(from), black_box(to));
            });
        });
    }

    group.finish();
}

fn benchmark_frame(c: &mut Criterion) {
    let scene = [TriangleMesh::uv_sphere(Vec3::ZERO, 2.0, 10.0)];
    let mut engine = Engine::new(RenderConfig::default());

    c.bench_function("render_sphere_frame", |b| {
        b.iter(|| engine.render(black_box(&scene)));
    });
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_lines,
    benchmark_frame
);
criterion_main!(benches);
