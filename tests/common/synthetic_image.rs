use seamfinding::picture::{rgb, Picture};

/// Generates a high-contrast color checkerboard picture.
pub fn checkerboard_picture(width: u32, height: u32, cell: u32) -> Picture {
    assert!(cell > 0, "cell size must be positive");

    let mut pic = Picture::new(width, height).expect("image dimensions must be positive");
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let val = if sum & 1 == 0 {
                rgb::pack(32, 64, 200)
            } else {
                rgb::pack(220, 180, 16)
            };
            pic.set(x, y, val);
        }
    }
    pic
}

/// Every pixel carries a distinct color derived from its coordinates.
pub fn coordinate_picture(width: u32, height: u32) -> Picture {
    let mut pic = Picture::new(width, height).expect("image dimensions must be positive");
    for y in 0..height {
        for x in 0..width {
            pic.set(x, y, rgb::pack(x as u8, y as u8, (x * 7 + y * 13) as u8));
        }
    }
    pic
}
