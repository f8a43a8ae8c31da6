use std::collections::HashMap;

use log::warn;

use super::types::{ButtonSlot, Course, GraphData, SlotRule};

pub type NodeIdx = usize;

/// Graph data with ids resolved to indices. Built once per data set.
///
/// Course order is the hit-test priority: when discs overlap, the course
/// declared first wins.
#[derive(Clone, Debug)]
pub struct Scene {
	pub courses: Vec<Course>,
	pub edges: Vec<(NodeIdx, NodeIdx)>,
	pub slot_angles: Vec<(ButtonSlot, f64)>,
}

impl Scene {
	pub fn new(data: &GraphData) -> Self {
		let id_to_idx: HashMap<&str, NodeIdx> = data
			.courses
			.iter()
			.enumerate()
			.map(|(idx, course)| (course.id.as_str(), idx))
			.collect();

		let edges = data
			.links
			.iter()
			.filter_map(|link| {
				match (
					id_to_idx.get(link.from.as_str()),
					id_to_idx.get(link.to.as_str()),
				) {
					(Some(&from), Some(&to)) => Some((from, to)),
					_ => {
						warn!("skipping link {} -> {}: unknown course", link.from, link.to);
						None
					}
				}
			})
			.collect();

		let slot_angles = data
			.slots
			.rules
			.iter()
			.filter_map(|(slot, rule)| match rule {
				SlotRule::Fixed(angle) => Some((*slot, *angle)),
				SlotRule::Toward { from, to } => {
					let resolved = id_to_idx
						.get(from.as_str())
						.zip(id_to_idx.get(to.as_str()));
					let Some((&a, &b)) = resolved else {
						warn!("dropping {} button: unknown course in {from} -> {to}", slot.name());
						return None;
					};
					let (a, b) = (&data.courses[a], &data.courses[b]);
					Some((*slot, (b.y - a.y).atan2(b.x - a.x)))
				}
			})
			.collect();

		Self {
			courses: data.courses.clone(),
			edges,
			slot_angles,
		}
	}

	#[cfg(test)]
	pub fn index_of(&self, id: &str) -> Option<NodeIdx> {
		self.courses.iter().position(|course| course.id == id)
	}
}
