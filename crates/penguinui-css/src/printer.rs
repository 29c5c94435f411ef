use std::fmt::{self, Write};

use crate::tree::{NodeId, NodeKind, Stylesheet};

const INDENT: &str = "    ";

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &child) in self.children(self.root()).iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            self.write_node(f, child, 0)?;
        }
        Ok(())
    }
}

impl Stylesheet {
    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let indent = INDENT.repeat(depth);
        let Some(kind) = self.kind(id) else {
            return Ok(());
        };

        match kind {
            NodeKind::Root => Ok(()),
            NodeKind::Comment { text } => write!(f, "{indent}/* {text} */"),
            NodeKind::Declaration {
                property,
                value,
                important,
            } => {
                let bang = if *important { " !important" } else { "" };
                write!(f, "{indent}{property}: {value}{bang};")
            }
            NodeKind::Rule { selector } => {
                write!(f, "{indent}{selector} ")?;
                self.write_block(f, id, depth)
            }
            NodeKind::AtRule {
                name,
                params,
                has_block,
            } => {
                write!(f, "{indent}@{name}")?;
                if !params.is_empty() {
                    write!(f, " {params}")?;
                }
                if *has_block {
                    f.write_char(' ')?;
                    self.write_block(f, id, depth)
                } else {
                    f.write_char(';')
                }
            }
        }
    }

    fn write_block(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let children = self.children(id);
        if children.is_empty() {
            return f.write_str("{}");
        }

        f.write_str("{\n")?;
        for &child in children {
            self.write_node(f, child, depth + 1)?;
            f.write_char('\n')?;
        }
        write!(f, "{}}}", INDENT.repeat(depth))
    }
}
