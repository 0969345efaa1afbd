//! The built-in demonstration report, used when no template is configured.

use crate::error::AppError;
use crate::report::Report;
use crate::template::children_height;
use enroll_report::{BoxNode, Element, LabelNode, TitledBoxNode, TitledBoxOptions};
use enroll_types::{Color, Font, FontStyle, Position, RectStyle, Size};

pub const PAGE_MARGIN: f32 = 10.0;
pub const COURSE_COUNT: usize = 8;
const COURSE_STEP: f32 = 12.0;
const SECTION_MARGIN: f32 = 5.0;

pub const BACKGROUND: Color = Color::rgb(200, 200, 200);
pub const HEADER_BLUE: Color = Color::rgb(66, 95, 168);

/// A gray page-sized box holding two sections: a list of course boxes whose
/// container is sized to fit them, and a captioned block of labels.
pub fn sample_report(page_size: Size) -> Result<Report, AppError> {
    let regular = Font::new("Arial", FontStyle::Regular, 8.0, Color::BLACK)?;
    let heading = Font::new("Arial", FontStyle::Bold, 10.0, Color::BLACK)?;

    let mut page = Element::from(BoxNode::new(
        Position::new(
            PAGE_MARGIN,
            PAGE_MARGIN,
            page_size.width - 2.0 * PAGE_MARGIN,
            page_size.height - 2.0 * PAGE_MARGIN,
        ),
        RectStyle::Fill,
        BACKGROUND,
    ));

    let courses = course_list(&heading, &regular)?;
    let courses_bottom = courses.position().y() + courses.position().height();
    page.add_child(courses)?;
    page.add_child(notes(&regular, courses_bottom + SECTION_MARGIN)?)?;

    let mut report = Report::new(page_size);
    report.add_page(vec![page]);
    Ok(report)
}

fn course_list(heading: &Font, regular: &Font) -> Result<Element, AppError> {
    let mut list = Element::from(TitledBoxNode::new(
        TitledBoxOptions::new("Courses", heading.clone()),
        Position::new(SECTION_MARGIN, SECTION_MARGIN, 120.0, 0.0),
    ));

    for i in 0..COURSE_COUNT {
        list.add_child(TitledBoxNode::new(
            TitledBoxOptions::new(format!("Course {}", i + 1), regular.clone()),
            Position::new(
                SECTION_MARGIN,
                SECTION_MARGIN + COURSE_STEP * i as f32,
                100.0,
                10.0,
            ),
        ))?;
    }

    // Gaps between the course boxes, plus top and bottom margins.
    let gaps = (COURSE_STEP - 10.0) * (COURSE_COUNT as f32 - 1.0);
    let height = children_height(&list) + gaps + 2.0 * SECTION_MARGIN;
    let width = list.position().width();
    list.resize(width, height);
    Ok(list)
}

fn notes(regular: &Font, top: f32) -> Result<Element, AppError> {
    let caption = regular.clone().with_color(Color::WHITE);
    let mut section = Element::from(TitledBoxNode::new(
        TitledBoxOptions::new("Notes", caption).with_fill_color(HEADER_BLUE),
        Position::new(SECTION_MARGIN, top, 120.0, 40.0),
    ));

    let line = regular.size_mm() + 1.0;
    for (i, text) in ["Enrollment is open.", "Seats are limited.", "Bring your ID."]
        .into_iter()
        .enumerate()
    {
        section.add_child(LabelNode::new(
            regular.clone(),
            text,
            Position::new(2.0, 2.0 + i as f32 * line, 100.0, line),
        ))?;
    }
    Ok(section)
}
