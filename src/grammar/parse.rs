use crate::grammar::Grammar;

impl Grammar {
    /// Builds a grammar from rule text. One rule per line,
    /// `LHS -> ALT1 | ALT2 | ...`; a line starting with `|` continues the
    /// previous left side. The first non-terminal defined becomes the start
    /// symbol. Right sides are not validated beyond shape: any symbol never
    /// used as a left side is a terminal.
    pub fn parse(grammar: &str) -> Result<Self, String> {
        let mut g = Self::new();

        let mut rules: Vec<(usize, &str)> = Vec::new();
        let mut previous_left: Option<usize> = None;

        for (i, line) in grammar.lines().enumerate() {
            if line.chars().all(|c| c.is_whitespace()) {
                continue;
            }

            let parts: Vec<&str> = line.split("->").collect();
            if parts.len() > 2 {
                return Err(format!("Line {}: too many \"->\"", i + 1));
            }

            let (left, rights) = if parts.len() == 2 {
                let left_str = parts[0].trim();
                if left_str.is_empty() {
                    return Err(format!("Line {}: empty left side", i + 1));
                }
                if left_str.split_whitespace().count() != 1 {
                    return Err(format!("Line {}: left side contains whitespace", i + 1));
                }
                let left = match g.get_symbol_index(left_str) {
                    Some(idx) => idx,
                    None => g.add_non_terminal(left_str),
                };
                (left, parts[1].trim())
            } else {
                // continuation line: "| ALT | ALT"
                match previous_left {
                    Some(idx) => (idx, parts[0].trim()[1..].trim()),
                    None => return Err(format!("Line {}: cannot find left side", i + 1)),
                }
            };

            previous_left = Some(left);
            rules.push((left, rights));
        }

        // Intern right sides only after every left side is known, so that
        // non-terminal membership does not depend on rule order.
        for (left, rights) in rules {
            for alternative in rights.split('|') {
                let body = alternative
                    .split_whitespace()
                    .map(|s| match g.get_symbol_index(s) {
                        Some(idx) => idx,
                        None => g.add_terminal(s.to_string()),
                    })
                    .collect();
                g.add_production(left, body);
            }
        }

        let start_symbol = g.non_terminal_iter().next().map(|nt| nt.index);
        g.start_symbol = start_symbol;

        Ok(g)
    }
}
