use crate::entities::Layout;
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Point;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use itertools::Itertools;
use log::warn;
use std::collections::HashSet;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Renders a layout to an SVG document: the container, every placed piece and a
/// caption with the key figures of the layout.
pub fn layout_to_svg(layout: &Layout, options: SvgDrawOptions, title: &str) -> Document {
    let container = &layout.container;

    let vbox = container.outer.scale(1.10);

    let theme = &options.theme;

    let stroke_width =
        f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let feasible = layout.is_feasible();
    if !feasible {
        warn!("rendering an infeasible layout");
    }

    let label = {
        //print some information above the left top of the container
        let bbox = container.outer;

        let label_content = format!(
            "width: {:.3} | height: {:.3} | density: {:.3}% | empty area: {:.3} | feasible: {} | {}",
            bbox.width(),
            bbox.height(),
            layout.density() * 100.0,
            layout.empty_area(),
            feasible,
            title,
        );
        Text::new(label_content)
            .set("x", bbox.x_min)
            .set(
                "y",
                bbox.y_min - 0.5 * 0.025 * f64::min(bbox.width(), bbox.height()),
            )
            .set("font-size", f64::min(bbox.width(), bbox.height()) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw container
    let container_group = {
        let bbox = container.outer;
        let title = Title::new(format!(
            "container, bbox: [x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
            bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max
        ));

        Group::new()
            .set("id", "container")
            .add(svg_util::data_to_path(
                svg_util::rect_data(&bbox),
                &[
                    ("fill", &*format!("{}", theme.container_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            ))
            .add(title)
    };

    //pieces that overlap another piece or stick out of the container
    let colliding: HashSet<usize> = {
        let mut colliding = HashSet::new();
        for (i, j) in (0..layout.n_placed()).tuple_combinations() {
            if layout.placed_pieces[i].collides_with(&layout.placed_pieces[j]) {
                colliding.insert(i);
                colliding.insert(j);
            }
        }
        for (i, pp) in layout.placed_pieces.iter().enumerate() {
            if !container.contains(&pp.bbox()) {
                colliding.insert(i);
            }
        }
        colliding
    };

    //draw pieces
    let pieces_group = {
        let mut pieces_group = Group::new().set("id", "pieces");

        for (i, pp) in layout.placed_pieces.iter().enumerate() {
            let bbox = pp.bbox();
            let (width, height) = pp.oriented_dims();

            let stroke_color = match options.highlight_collisions && colliding.contains(&i) {
                true => theme.collision_highlight_color,
                false => svg_util::change_brightness(theme.piece_fill, 0.5),
            };
            let stroke_color = format!("{stroke_color}");

            let mut piece_group = Group::new()
                .set("id", format!("piece_{}", pp.piece_id))
                .add(svg_util::data_to_path(
                    svg_util::rect_data(&bbox),
                    &[
                        ("fill", &*format!("{}", theme.piece_fill)),
                        ("fill-opacity", "0.5"),
                        ("stroke", &*stroke_color),
                        ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                    ],
                ))
                .add(Title::new(format!(
                    "piece, id: {}, position: ({:.3}, {:.3}), size: {:.3}x{:.3}",
                    pp.piece_id, bbox.x_min, bbox.y_min, width, height
                )));

            if options.show_piece_ids {
                let Point(cx, cy) = pp.centroid();
                let id_label = Text::new(format!("{}", pp.piece_id))
                    .set("x", cx)
                    .set("y", cy)
                    .set("font-size", f64::min(width, height) * 0.5)
                    .set("font-family", "monospace")
                    .set("font-weight", "bold")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central");
                piece_group = piece_group.add(id_label);
            }

            pieces_group = pieces_group.add(piece_group);
        }
        pieces_group
    };

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    Document::new()
        .set("viewBox", vbox_svg)
        .add(container_group)
        .add(pieces_group)
        .add(label)
}
