//! End-to-end pipeline tests: parse, transform, emit.

use pretty_assertions::assert_eq;
use vue_parser::parse;
use vue_transformer::{transform, DiagnosticCode, TransformOptions, Transformed};

fn convert(source: &str, name: &str) -> Transformed {
    let parsed = parse(source);
    assert!(parsed.errors.is_empty(), "parse errors: {:?}", parsed.errors);
    let options = TransformOptions {
        component_name: name.to_string(),
    };
    transform(&parsed.document, &options).expect("transform succeeds")
}

#[test]
fn round_trip_scenario() {
    let source = r#"<template>
  <div><p v-if="show">{{name}}</p></div>
</template>
<script>
export default {
  data() {
    return { show: true, name: 'n' };
  },
  methods: {
    handleClick() {}
  },
  mounted() {
    console.log(this.name);
  }
};
</script>
"#;

    let result = convert(source, "Counter");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);

    let expected = r#"import { createElement, Component } from 'react';

export default class Counter extends Component {
  constructor(props) {
    super(props);
    state = {
      show: true,
      name: "n"
    };
  }

  handleClick() {}

  componentDidMount() {
    console.log(this.state.name);
  }

  render() {
    return <div>{this.state.show ? <p>{this.state.name}</p> : null}</div>;
  }
}
"#;

    assert_eq!(result.code, expected);
}

#[test]
fn full_component_with_props_events_and_lifecycle() {
    let source = r#"<template>
  <div>
    <p class="title" v-on:click="handleClick">{{title}}</p>
    <p v-if="show" class="name">{{name}}</p>
  </div>
</template>
<script>
export default {
  props: ['title'],
  data() {
    return { show: true, name: 'name' };
  },
  methods: {
    handleClick() {},
    handleClick2(a, b) {
      console.log(1);
    }
  },
  created() {},
  mounted() {
    console.log(this.name);
  }
};
</script>
<style>
.title { color: red; }
</style>
"#;

    let result = convert(source, "MyComponent");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);

    let expected = r#"import { createElement, Component } from 'react';

export default class MyComponent extends Component {
  constructor(props) {
    super(props);
    state = {
      show: true,
      name: "name"
    };
  }

  handleClick() {}

  handleClick2(a, b) {
    console.log(1);
  }

  componentWillMount() {}

  componentDidMount() {
    console.log(this.state.name);
  }

  render() {
    return <div><p className="title" onClick={this.handleClick}>{this.props.title}</p>{this.state.show ? <p className="name">{this.state.name}</p> : null}</div>;
  }
}
"#;

    assert_eq!(result.code, expected);
}

#[test]
fn prop_wins_over_data_field_in_markup() {
    let source = r#"<template><p>{{shared}}</p></template>
<script>
export default {
  props: ['shared'],
  data() {
    return { shared: 'x' };
  }
};
</script>
"#;

    let result = convert(source, "Widget");
    assert!(result.code.contains("{this.props.shared}"));
    assert!(!result.code.contains("this.state.shared}"));
}

#[test]
fn unresolved_condition_suppresses_element_but_run_completes() {
    let source = r#"<template><div><p v-if="missing">x</p></div></template>
<script>export default {};</script>
"#;

    let result = convert(source, "Widget");
    assert!(result.code.contains("return <div />;"));
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, DiagnosticCode::UnresolvedBinding);
}

#[test]
fn unsupported_constructs_degrade_with_one_diagnostic_each() {
    let source = r#"<template><div v-bind:title="name">{{name}}</div></template>
<script>
export default {
  props: { items: { type: Array, default: () => [] } },
  data() {
    return { name: 'n', extra: [1] };
  }
};
</script>
"#;

    let result = convert(source, "Widget");
    // One for the factory default, one for the non-literal data field at
    // extraction, one for the same field at assembly, one for v-bind.
    let codes: Vec<_> = result.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes
            .iter()
            .filter(|c| **c == DiagnosticCode::UnsupportedConstruct)
            .count(),
        3
    );
    assert!(codes.contains(&DiagnosticCode::UnsupportedDirective));
    assert!(result.code.contains("{this.state.name}"));
}

#[test]
fn suppressed_root_renders_null() {
    let source = r#"<template><p v-if="missing">x</p></template>
<script>export default {};</script>
"#;

    let result = convert(source, "Widget");
    assert!(result.code.contains("return null;"));
}

#[test]
fn independent_runs_share_nothing() {
    let a = r#"<template><p>{{x}}</p></template>
<script>export default { data() { return { x: 'a' }; } };</script>
"#;
    let b = r#"<template><p>{{x}}</p></template>
<script>export default { props: ['x'] };</script>
"#;

    let first = convert(a, "A");
    let second = convert(b, "B");
    assert!(first.code.contains("this.state.x"));
    assert!(second.code.contains("this.props.x"));
}
