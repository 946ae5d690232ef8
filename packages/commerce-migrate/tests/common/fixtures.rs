//! Legacy command sources used across tests

use std::fs;
use std::path::{Path, PathBuf};

/// Implements the marker interface, branches in `performExecute`
pub const EXAMPLE_CMD: &str = r#"
package com.acme.commerce.commands;

import com.ibm.commerce.command.ControllerCommand;
import com.ibm.commerce.datatype.TypedProperty;

public class ExampleCmd implements ControllerCommand {
    private String orderId;
    private String userId;
    private String paymentMethod;

    public void performExecute() throws ECException {
        TypedProperty resp = new TypedProperty();
        if (paymentMethod == null) {
            throw new ECApplicationException();
        }
        resp.put("orderId", orderId);
    }
}
"#;

/// Extends the marker base class, one response write, no branching
pub const PLAIN_CMD: &str = r#"
package com.acme.commerce.commands;

public class PlainCmd extends ControllerCommandImpl {
    private String orderId;

    public void performExecute() throws ECException {
        super.performExecute();
        resp.put("orderId", orderId);
    }
}
"#;

pub const NOT_A_COMMAND: &str = r#"
public class NotACommand implements Runnable {
    private String orderId;

    public void run() {
        System.out.println(orderId);
    }
}
"#;

/// Missing the closing brace of the class
pub const UNBALANCED: &str = r#"
public class Broken extends ControllerCommandImpl {
    public void performExecute() {
        resp.put("a", "b");
    }
"#;

/// Command whose entry method reads the command context
pub fn context_cmd(class_name: &str) -> String {
    format!(
        r#"
public class {class_name} extends ControllerCommandImpl {{
    private String userId;

    public void performExecute() {{
        Integer storeId = commandContext.getStoreId();
    }}
}}
"#
    )
}

/// Command with `writes` calls to `receiver.put(..)` in `performExecute`
pub fn response_writes_cmd(class_name: &str, receiver: &str, writes: usize) -> String {
    let body: String = (0..writes)
        .map(|i| format!("        {receiver}.put(\"k{i}\", \"v{i}\");\n"))
        .collect();
    format!(
        "public class {class_name} extends ControllerCommandImpl {{\n    public void performExecute() {{\n{body}    }}\n}}\n"
    )
}

/// Command whose entry method builds a string from `operands` literals
///
/// The concatenation nests one expression level per operand.
pub fn deep_concatenation_cmd(class_name: &str, operands: usize) -> String {
    let expression = vec!["\"a\""; operands].join(" + ");
    format!(
        "public class {class_name} extends ControllerCommandImpl {{\n    private String orderId;\n\n    public void performExecute() {{\n        String s = {expression};\n        resp.put(\"s\", s);\n    }}\n}}\n"
    )
}

/// Write `files` into `dir`, returning their paths
pub fn write_sources(dir: &Path, files: &[(&str, &str)]) -> Vec<PathBuf> {
    fs::create_dir_all(dir).unwrap();
    files
        .iter()
        .map(|(name, content)| {
            let path = dir.join(name);
            fs::write(&path, content).unwrap();
            path
        })
        .collect()
}
