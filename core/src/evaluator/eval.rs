//! Core evaluation logic.

use crate::evaluator::{BuilderId, EvalError, EvaluatorOptions, Object, Value};
use accessor_types::{Callee, ClassDecl, Expr, ExprKind, FunctionDecl, PropertyDecl, Scalar, Stmt};
use ecow::{EcoString, eco_format};
use hashbrown::HashMap;

/// Outcome of executing one statement.
enum Flow {
    Next,
    Return(Value),
}

/// State of one function activation.
struct Frame<'o> {
    this: &'o mut Object,
    locals: HashMap<EcoString, Value>,
}

/// Interpreter for accessor bodies.
///
/// Builders created while running stay alive for the evaluator's lifetime,
/// so a builder value returned from a call can still be rendered.
pub struct Evaluator {
    options: EvaluatorOptions,
    builders: Vec<String>,
    depth: usize,
}

impl Evaluator {
    pub fn new(options: EvaluatorOptions) -> Self {
        Self {
            options,
            builders: Vec::new(),
            depth: 0,
        }
    }

    /// Read `property` of `this` through its getter.
    pub fn get(
        &mut self,
        class: &ClassDecl,
        property: &str,
        this: &mut Object,
    ) -> Result<Value, EvalError> {
        let getter = Self::property(class, property)?
            .getter
            .as_ref()
            .ok_or_else(|| EvalError::MissingAccessor {
                property: property.into(),
                accessor: "getter",
            })?;
        self.call(getter, this, Vec::new())
    }

    /// Write `value` to `property` of `this` through its setter.
    pub fn set(
        &mut self,
        class: &ClassDecl,
        property: &str,
        this: &mut Object,
        value: Value,
    ) -> Result<(), EvalError> {
        let setter = Self::property(class, property)?
            .setter
            .as_ref()
            .ok_or_else(|| EvalError::MissingAccessor {
                property: property.into(),
                accessor: "setter",
            })?;
        self.call(setter, this, vec![value]).map(|_| ())
    }

    fn property<'c>(class: &'c ClassDecl, property: &str) -> Result<&'c PropertyDecl, EvalError> {
        class
            .property(property)
            .ok_or_else(|| EvalError::UnknownProperty {
                class: class.name.clone(),
                property: property.into(),
            })
    }

    /// Run `function` with `this` as receiver.
    pub fn call(
        &mut self,
        function: &FunctionDecl,
        this: &mut Object,
        args: Vec<Value>,
    ) -> Result<Value, EvalError> {
        let Some(body) = &function.body else {
            return Err(EvalError::ExternalFunction {
                function: function.name.clone(),
            });
        };
        if args.len() != function.params.len() {
            return Err(EvalError::ArityMismatch {
                function: function.name.clone(),
                expected: function.params.len(),
                actual: args.len(),
            });
        }

        let locals = function
            .params
            .iter()
            .map(|param| param.name.clone())
            .zip(args)
            .collect();
        let mut frame = Frame { this, locals };

        self.descend()?;
        let result = self.run_body(function, body, &mut frame);
        self.depth -= 1;

        result
    }

    fn run_body(
        &mut self,
        function: &FunctionDecl,
        body: &[Stmt],
        frame: &mut Frame<'_>,
    ) -> Result<Value, EvalError> {
        for stmt in body {
            if let Flow::Return(value) = self.exec(stmt, frame)? {
                return Ok(value);
            }
        }

        if function.return_type.is_scalar(Scalar::Unit) {
            Ok(Value::Unit)
        } else {
            Err(EvalError::MissingReturn {
                function: function.name.clone(),
            })
        }
    }

    /// Text a value contributes to a concatenation or an `append`.
    pub fn render(&self, value: &Value) -> String {
        match value {
            Value::Unit => "kotlin.Unit".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(value) => value.to_string(),
            Value::Int(value) => value.to_string(),
            Value::Str(value) => value.to_string(),
            Value::Builder(BuilderId(id)) => self.builders.get(*id).cloned().unwrap_or_default(),
        }
    }

    fn descend(&mut self) -> Result<(), EvalError> {
        if self.depth >= self.options.max_depth {
            return Err(EvalError::StackOverflow {
                max_depth: self.options.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn exec(&mut self, stmt: &Stmt, frame: &mut Frame<'_>) -> Result<Flow, EvalError> {
        match stmt {
            Stmt::Expr(expr) => {
                self.eval_expr(expr, frame)?;
                Ok(Flow::Next)
            }
            Stmt::Return(expr) => self.eval_expr(expr, frame).map(Flow::Return),
            Stmt::Local(local) => {
                let value = self.eval_expr(&local.init, frame)?;
                frame.locals.insert(local.name.clone(), value);
                Ok(Flow::Next)
            }
            // Declarations have no runtime effect in a body.
            Stmt::Decl(_) => Ok(Flow::Next),
        }
    }

    fn eval_expr(&mut self, expr: &Expr, frame: &mut Frame<'_>) -> Result<Value, EvalError> {
        self.descend()?;
        let result = self.eval_expr_inner(expr, frame);
        self.depth -= 1;

        result
    }

    fn eval_expr_inner(&mut self, expr: &Expr, frame: &mut Frame<'_>) -> Result<Value, EvalError> {
        match &expr.kind {
            ExprKind::Const(literal) => Ok(Value::from(literal)),
            ExprKind::GetField { field } => {
                frame
                    .this
                    .field(field)
                    .cloned()
                    .ok_or_else(|| EvalError::UnknownField {
                        class: frame.this.class.clone(),
                        field: field.clone(),
                    })
            }
            ExprKind::SetField { field, value } => {
                let value = self.eval_expr(value, frame)?;
                frame.this.set_field(field.clone(), value);
                Ok(Value::Unit)
            }
            ExprKind::GetValue(name) => {
                frame
                    .locals
                    .get(name)
                    .cloned()
                    .ok_or_else(|| EvalError::UnboundValue { name: name.clone() })
            }
            ExprKind::Call {
                callee,
                receiver,
                args,
            } => {
                let receiver = match receiver {
                    Some(receiver) => Some(self.eval_expr(receiver, frame)?),
                    None => None,
                };
                let args = args
                    .iter()
                    .map(|arg| self.eval_expr(arg, frame))
                    .collect::<Result<Vec<_>, _>>()?;
                self.call_builder(callee, receiver, args)
            }
            ExprKind::Block { statements, value } => {
                // Locals declared in the block shadow outer ones until it ends.
                let outer = frame.locals.clone();
                let result = self.eval_block(statements, value, frame);
                frame.locals = outer;
                result
            }
            ExprKind::Concat(operands) => {
                let mut text = String::new();
                for operand in operands {
                    let value = self.eval_expr(operand, frame)?;
                    text.push_str(&self.render(&value));
                }
                Ok(Value::Str(text.into()))
            }
        }
    }

    fn eval_block(
        &mut self,
        statements: &[Stmt],
        value: &Expr,
        frame: &mut Frame<'_>,
    ) -> Result<Value, EvalError> {
        for stmt in statements {
            if let Flow::Return(_) = self.exec(stmt, frame)? {
                return Err(EvalError::ReturnInBlock);
            }
        }
        self.eval_expr(value, frame)
    }

    /// Interpret a call to one of the builder class operations.
    fn call_builder(
        &mut self,
        callee: &Callee,
        receiver: Option<Value>,
        args: Vec<Value>,
    ) -> Result<Value, EvalError> {
        if callee.class != self.options.builder_class {
            return Err(EvalError::UnsupportedCall {
                callee: callee.clone(),
            });
        }

        match (callee.member.as_str(), receiver) {
            ("<init>", None) => {
                let initial = match args.as_slice() {
                    [] | [Value::Int(_)] => String::new(),
                    [Value::Str(content)] => content.to_string(),
                    _ => {
                        return Err(EvalError::UnsupportedCall {
                            callee: callee.clone(),
                        });
                    }
                };
                self.builders.push(initial);
                Ok(Value::Builder(BuilderId(self.builders.len() - 1)))
            }
            ("append", receiver) => {
                let id = self.builder(callee, receiver)?;
                let [value] = Self::arity::<1>(callee, args)?;
                let text = self.render(&value);
                self.builders[id.0].push_str(&text);
                Ok(Value::Builder(id))
            }
            ("toString", receiver) => {
                let id = self.builder(callee, receiver)?;
                let [] = Self::arity::<0>(callee, args)?;
                Ok(Value::Str(self.builders[id.0].as_str().into()))
            }
            _ => Err(EvalError::UnsupportedCall {
                callee: callee.clone(),
            }),
        }
    }

    fn builder(&self, callee: &Callee, receiver: Option<Value>) -> Result<BuilderId, EvalError> {
        match receiver {
            Some(Value::Builder(id)) if id.0 < self.builders.len() => Ok(id),
            _ => Err(EvalError::NotABuilder {
                callee: callee.clone(),
            }),
        }
    }

    fn arity<const N: usize>(callee: &Callee, args: Vec<Value>) -> Result<[Value; N], EvalError> {
        let actual = args.len();
        <[Value; N]>::try_from(args).map_err(|_| EvalError::ArityMismatch {
            function: eco_format!("{}", callee),
            expected: N,
            actual,
        })
    }
}
