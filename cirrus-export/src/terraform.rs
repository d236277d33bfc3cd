//! Terraform template emitter.
//!
//! One resource block per recognized category (network boundary, subnet,
//! compute instance, managed database). Unrecognized categories produce no
//! block without aborting the rest. Property defaults fill in anything the
//! drawing left out; resource names replace only the first hyphen of the
//! item id with an underscore.

use std::fmt::Write;

use cirrus_core::{CanvasItem, ExportData};

use crate::sanitize::tf_resource_name;

const DEFAULT_VPC_CIDR: &str = "10.0.0.0/16";
const DEFAULT_SUBNET_CIDR: &str = "10.0.1.0/24";
const DEFAULT_INSTANCE_TYPE: &str = "t3.micro";
const DEFAULT_DB_ENGINE: &str = "mysql";
const DEFAULT_DB_INSTANCE_CLASS: &str = "db.t3.micro";

/// Emit a Terraform template for the recognized items in the snapshot.
#[must_use]
pub fn emit(data: &ExportData) -> String {
    let mut blocks: Vec<String> = Vec::new();

    for item in &data.items {
        match item.category() {
            "vpc" => blocks.push(vpc_block(item)),
            "subnet" => blocks.push(subnet_block(data, item)),
            "compute" => blocks.push(compute_block(data, item)),
            "database" => blocks.push(database_block(item)),
            other => {
                tracing::debug!(item = %item.id, category = other, "no Terraform mapping, skipping");
            }
        }
    }

    blocks.join("\n")
}

fn vpc_block(item: &CanvasItem) -> String {
    let cidr = item.string_property("cidr").unwrap_or(DEFAULT_VPC_CIDR);
    let mut out = String::new();
    let _ = writeln!(out, "resource \"aws_vpc\" \"{}\" {{", tf_resource_name(&item.id));
    let _ = writeln!(out, "  cidr_block = \"{cidr}\"");
    write_name_tag(&mut out, item);
    out.push_str("}\n");
    out
}

fn subnet_block(data: &ExportData, item: &CanvasItem) -> String {
    let cidr = item.string_property("cidr").unwrap_or(DEFAULT_SUBNET_CIDR);
    let mut out = String::new();
    let _ = writeln!(out, "resource \"aws_subnet\" \"{}\" {{", tf_resource_name(&item.id));
    if let Some(vpc) = parent_of_category(data, item, "vpc") {
        let _ = writeln!(out, "  vpc_id = aws_vpc.{}.id", tf_resource_name(&vpc.id));
    }
    let _ = writeln!(out, "  cidr_block = \"{cidr}\"");
    write_name_tag(&mut out, item);
    out.push_str("}\n");
    out
}

fn compute_block(data: &ExportData, item: &CanvasItem) -> String {
    let instance_type = item
        .string_property("instanceType")
        .unwrap_or(DEFAULT_INSTANCE_TYPE);
    let mut out = String::new();
    let _ = writeln!(out, "resource \"aws_instance\" \"{}\" {{", tf_resource_name(&item.id));
    let _ = writeln!(out, "  instance_type = \"{instance_type}\"");
    if let Some(subnet) = parent_of_category(data, item, "subnet") {
        let _ = writeln!(out, "  subnet_id = aws_subnet.{}.id", tf_resource_name(&subnet.id));
    }
    write_name_tag(&mut out, item);
    out.push_str("}\n");
    out
}

fn database_block(item: &CanvasItem) -> String {
    let engine = item.string_property("engine").unwrap_or(DEFAULT_DB_ENGINE);
    let instance_class = item
        .string_property("instanceClass")
        .unwrap_or(DEFAULT_DB_INSTANCE_CLASS);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "resource \"aws_db_instance\" \"{}\" {{",
        tf_resource_name(&item.id)
    );
    let _ = writeln!(out, "  engine = \"{engine}\"");
    let _ = writeln!(out, "  instance_class = \"{instance_class}\"");
    write_name_tag(&mut out, item);
    out.push_str("}\n");
    out
}

fn parent_of_category<'a>(
    data: &'a ExportData,
    item: &CanvasItem,
    category: &str,
) -> Option<&'a CanvasItem> {
    let parent = data.item(item.parent_id.as_deref()?)?;
    (parent.category() == category).then_some(parent)
}

fn write_name_tag(out: &mut String, item: &CanvasItem) {
    if item.label.is_empty() {
        return;
    }
    out.push('\n');
    out.push_str("  tags = {\n");
    let _ = writeln!(out, "    Name = \"{}\"", item.label.replace('"', "\\\""));
    out.push_str("  }\n");
}
