//! People with random categorical attributes, linked when they share the
//! value of the active attribute.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;

use super::Link;
use super::palette::color_at;

pub const NUM_NODES: usize = 200;

const DEPARTMENTS: &[&str] = &["Engineering", "Marketing", "Sales", "HR", "Finance", "Product", "Design"];
const PERFORMANCES: &[&str] = &["Exceptional", "Above Average", "Average", "Below Average"];
const LOCATIONS: &[&str] = &["North America", "Europe", "Asia", "South America", "Africa", "Australia"];
const EXPERIENCES: &[&str] = &["Junior", "Mid-level", "Senior", "Lead", "Executive"];

/// The categorical dimension used to link and colour nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Attribute {
	#[default]
	Department,
	Performance,
	Location,
	Experience,
}

impl Attribute {
	pub const ALL: [Attribute; 4] = [
		Attribute::Department,
		Attribute::Performance,
		Attribute::Location,
		Attribute::Experience,
	];

	pub fn domain(self) -> &'static [&'static str] {
		match self {
			Attribute::Department => DEPARTMENTS,
			Attribute::Performance => PERFORMANCES,
			Attribute::Location => LOCATIONS,
			Attribute::Experience => EXPERIENCES,
		}
	}

	/// Key used in URLs and the selector.
	pub fn key(self) -> &'static str {
		match self {
			Attribute::Department => "department",
			Attribute::Performance => "performance",
			Attribute::Location => "location",
			Attribute::Experience => "experience",
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			Attribute::Department => "Department",
			Attribute::Performance => "Performance",
			Attribute::Location => "Location",
			Attribute::Experience => "Experience Level",
		}
	}

	/// Palette colour of `value`, by its position in this attribute's domain.
	pub fn color_of(self, value: &str) -> &'static str {
		let index = self.domain().iter().position(|v| *v == value).unwrap_or(0);
		color_at(index)
	}
}

impl fmt::Display for Attribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

impl FromStr for Attribute {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Attribute::ALL
			.into_iter()
			.find(|a| a.key().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| format!("unknown attribute: {s}"))
	}
}

/// One value per attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
	pub department: &'static str,
	pub performance: &'static str,
	pub location: &'static str,
	pub experience: &'static str,
}

impl Profile {
	pub fn random<R: Rng>(rng: &mut R) -> Self {
		let mut pick = |domain: &'static [&'static str]| domain[rng.gen_range(0..domain.len())];
		Self {
			department: pick(DEPARTMENTS),
			performance: pick(PERFORMANCES),
			location: pick(LOCATIONS),
			experience: pick(EXPERIENCES),
		}
	}

	pub fn get(&self, attribute: Attribute) -> &'static str {
		match attribute {
			Attribute::Department => self.department,
			Attribute::Performance => self.performance,
			Attribute::Location => self.location,
			Attribute::Experience => self.experience,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct PersonNode {
	pub id: String,
	pub name: String,
	pub category: Profile,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttributeGraph {
	pub nodes: Vec<PersonNode>,
	pub links: Vec<Link>,
	pub attribute: Attribute,
}

impl AttributeGraph {
	/// Generates `count` people and links them by `attribute`.
	pub fn generate<R: Rng>(count: usize, attribute: Attribute, rng: &mut R) -> Self {
		let nodes = (0..count)
			.map(|i| PersonNode {
				id: format!("node{i}"),
				name: format!("Node {i}"),
				category: Profile::random(rng),
			})
			.collect::<Vec<_>>();
		let links = build_links(&nodes, attribute);
		Self {
			nodes,
			links,
			attribute,
		}
	}

	/// Discards the current links and rebuilds them for `attribute`.
	pub fn relink(&mut self, attribute: Attribute) {
		self.links = build_links(&self.nodes, attribute);
		self.attribute = attribute;
		debug!("Rebuilt {} links by {attribute}", self.links.len());
	}

	pub fn node(&self, id: &str) -> Option<&PersonNode> {
		self.nodes.iter().find(|n| n.id == id)
	}
}

/// Links every unordered pair of nodes sharing the value of `attribute`.
///
/// Quadratic in the node count: fine for a few hundred nodes, not beyond.
pub fn build_links(nodes: &[PersonNode], attribute: Attribute) -> Vec<Link> {
	let mut links = Vec::new();
	for (i, a) in nodes.iter().enumerate() {
		for b in &nodes[i + 1..] {
			if a.category.get(attribute) == b.category.get(attribute) {
				links.push(Link::new(a.id.clone(), b.id.clone()));
			}
		}
	}
	links
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn person(i: usize, department: &'static str, location: &'static str) -> PersonNode {
		PersonNode {
			id: format!("node{i}"),
			name: format!("Node {i}"),
			category: Profile {
				department,
				performance: "Average",
				location,
				experience: "Junior",
			},
		}
	}

	#[test]
	fn generated_values_come_from_domains() {
		let mut rng = SmallRng::seed_from_u64(7);
		let graph = AttributeGraph::generate(NUM_NODES, Attribute::Department, &mut rng);
		assert_eq!(graph.nodes.len(), NUM_NODES);
		assert_eq!(graph.nodes[42].id, "node42");
		for node in &graph.nodes {
			for attribute in Attribute::ALL {
				assert!(attribute.domain().contains(&node.category.get(attribute)));
			}
		}
	}

	#[test]
	fn link_count_matches_group_sizes() {
		let mut rng = SmallRng::seed_from_u64(11);
		let graph = AttributeGraph::generate(60, Attribute::Location, &mut rng);
		let mut sizes: HashMap<&str, usize> = HashMap::new();
		for node in &graph.nodes {
			*sizes.entry(node.category.location).or_default() += 1;
		}
		let expected: usize = sizes.values().map(|n| n * (n - 1) / 2).sum();
		assert_eq!(graph.links.len(), expected);
	}

	#[test]
	fn links_join_equal_values_only() {
		let nodes = vec![
			person(0, "HR", "Asia"),
			person(1, "HR", "Europe"),
			person(2, "Sales", "Asia"),
			person(3, "Design", "Africa"),
		];
		assert_eq!(build_links(&nodes, Attribute::Department), [Link::new("node0", "node1")]);
		assert_eq!(build_links(&nodes, Attribute::Location), [Link::new("node0", "node2")]);
		assert_eq!(build_links(&nodes, Attribute::Performance).len(), 6);
	}

	#[test]
	fn relink_is_idempotent() {
		let mut rng = SmallRng::seed_from_u64(3);
		let mut graph = AttributeGraph::generate(40, Attribute::Department, &mut rng);
		graph.relink(Attribute::Experience);
		let first = graph.links.clone();
		graph.relink(Attribute::Experience);
		assert_eq!(graph.links, first);
		assert_eq!(graph.attribute, Attribute::Experience);
		assert_eq!(graph.nodes.len(), 40);
	}

	#[test]
	fn parses_attribute_keys() {
		assert_eq!("Location".parse::<Attribute>(), Ok(Attribute::Location));
		assert_eq!(" experience ".parse::<Attribute>(), Ok(Attribute::Experience));
		assert!("salary".parse::<Attribute>().is_err());
	}

	#[test]
	fn colors_follow_domain_position() {
		assert_eq!(Attribute::Department.color_of("Engineering"), color_at(0));
		assert_eq!(Attribute::Location.color_of("Australia"), color_at(5));
	}
}
