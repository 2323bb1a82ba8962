use timetable_grid::image::{Rgb, RgbImageBuf};

pub const WHITE: Rgb = [255, 255, 255];
pub const HEADER_BLUE: Rgb = [45, 75, 130];
pub const RULE_GRAY: Rgb = [160, 160, 160];
pub const BLOCK_COLORS: [Rgb; 3] = [[120, 190, 230], [240, 170, 90], [150, 210, 120]];

/// Geometry of a synthetic right-to-left weekly timetable.
#[derive(Clone, Debug)]
pub struct SyntheticTimetable {
    pub width: usize,
    pub height: usize,
    pub header_top: usize,
    pub header_bottom: usize,
    pub grid_left: usize,
    pub grid_width: usize,
    pub time_percent: usize,
    pub row_pitch: usize,
    pub rows: usize,
    /// Width of the vertical rules; horizontal rules are always 1px.
    pub vertical_rule_width: usize,
    /// Physical day slots (0 = leftmost) that receive a class block.
    pub filled_slots: Vec<usize>,
}

impl Default for SyntheticTimetable {
    fn default() -> Self {
        Self {
            width: 1040,
            height: 640,
            header_top: 10,
            header_bottom: 50,
            grid_left: 20,
            grid_width: 1000,
            time_percent: 10,
            row_pitch: 80,
            rows: 7,
            vertical_rule_width: 1,
            filled_slots: vec![1, 3, 6],
        }
    }
}

impl SyntheticTimetable {
    pub fn grid_right(&self) -> usize {
        self.grid_left + self.grid_width
    }

    pub fn day_width(&self) -> f64 {
        let time = self.grid_width * self.time_percent / 100;
        (self.grid_width - time) as f64 / 7.0
    }

    /// The eight true day-column dividers.
    pub fn dividers(&self) -> Vec<usize> {
        let day = self.day_width();
        (0..8)
            .map(|i| (self.grid_left as f64 + i as f64 * day) as usize)
            .collect()
    }

    /// Rows of the horizontal rules; the first sits right below the header.
    pub fn rule_rows(&self) -> Vec<usize> {
        (0..=self.rows)
            .map(|i| self.header_bottom + i * self.row_pitch)
            .collect()
    }

    pub fn render(&self) -> RgbImageBuf {
        let mut img = RgbImageBuf::filled(self.width, self.height, WHITE);
        img.fill_rect(0, self.header_top, self.width, self.header_bottom, HEADER_BLUE);

        let rows = self.rule_rows();
        let top = rows[0];
        let bottom = *rows.last().expect("at least one rule row") + 1;
        let right = self.grid_right() + self.vertical_rule_width;
        let dividers = self.dividers();

        for (i, &slot) in self.filled_slots.iter().enumerate() {
            let x0 = dividers[slot] + 8;
            let x1 = dividers[slot + 1] - 8;
            let y0 = rows[1] + 10;
            let y1 = rows[3] - 10;
            img.fill_rect(x0, y0, x1, y1, BLOCK_COLORS[i % BLOCK_COLORS.len()]);
        }

        for &y in &rows {
            img.fill_rect(self.grid_left, y, right, y + 1, RULE_GRAY);
        }
        for x in dividers.iter().copied().chain([self.grid_right()]) {
            img.fill_rect(x, top, x + self.vertical_rule_width, bottom, RULE_GRAY);
        }
        img
    }
}
