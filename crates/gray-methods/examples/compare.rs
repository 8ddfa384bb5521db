use gray_methods::{compare, load_pixel_grid, render_figure};
use gray_methods_montage::{write_png, MontageLayout};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: compare <image_path>");
        return Ok(());
    };

    let grid = load_pixel_grid(&path)?;
    let set = compare(&grid);

    for (method, map) in set.maps() {
        let (min, max) = map.intensity_range();
        println!("{method}: intensity range [{min:.1}, {max:.1}]");
    }

    let figure = render_figure(
        &grid,
        &set,
        "RGB to grayscale conversion methods",
        &MontageLayout::default(),
    )?;
    write_png("compare.png", &figure)?;
    println!("wrote compare.png");

    Ok(())
}
