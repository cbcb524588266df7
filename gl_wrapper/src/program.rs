use gl::types::{GLenum, GLuint};
use std::ffi::{c_char, CString};
use thiserror::Error;

pub struct ProgramBuilder {
    vert: CString,
    frag: CString,
}

impl ProgramBuilder {
    pub fn new(vert_src: &str, frag_src: &str) -> Self {
        Self {
            vert: CString::new(vert_src).unwrap(),
            frag: CString::new(frag_src).unwrap(),
        }
    }

    pub fn build(self) -> Result<Program, PBError> {
        let vert = compile_stage(gl::VERTEX_SHADER, &self.vert)?;
        let frag = compile_stage(gl::FRAGMENT_SHADER, &self.frag)?;

        let mut success: i32 = 0;

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                let buf = [0_u8; 1024];

                gl::GetProgramInfoLog(
                    program,
                    1024,
                    std::ptr::null_mut(),
                    (&buf).as_ptr() as *mut c_char,
                );

                return Err(PBError::Linking(read_info_log(&buf)));
            }

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            Ok(Program { id: program })
        }
    }
}

fn compile_stage(kind: GLenum, src: &CString) -> Result<GLuint, PBError> {
    let mut success: i32 = 0;

    unsafe {
        let stage = gl::CreateShader(kind);

        gl::ShaderSource(
            stage,
            1,
            (&src.as_ptr()) as *const *const c_char,
            std::ptr::null(),
        );

        gl::CompileShader(stage);
        gl::GetShaderiv(stage, gl::COMPILE_STATUS, (&mut success) as *mut i32);
        if success != 1 {
            let buf = [0_u8; 1024];

            gl::GetShaderInfoLog(
                stage,
                1024,
                std::ptr::null_mut(),
                (&buf).as_ptr() as *mut c_char,
            );

            return Err(PBError::Compilation(read_info_log(&buf)));
        }

        Ok(stage)
    }
}

fn read_info_log(buf: &[u8; 1024]) -> String {
    let data = if buf.contains(&0) {
        buf.split(|a| *a == 0).next().unwrap()
    } else {
        &buf[..]
    };

    CString::new(data).unwrap().to_string_lossy().to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("{0}")]
    Compilation(String),
    #[error("{0}")]
    Linking(String),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    /// Resolves a uniform location in the linked program.
    pub fn uniform(&self, name: &str) -> Result<Uniform, UniformError> {
        let c_name = CString::new(name).unwrap();

        let location = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };

        if location < 0 {
            return Err(UniformError::NotFound(name.to_string()));
        }

        Ok(Uniform { location })
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

/// Location handle returned by [`Program::uniform`]. Uploads go through
/// [`crate::renderer::GlRenderer`] so the right program is bound first.
#[derive(Debug, Clone, Copy)]
pub struct Uniform {
    pub(crate) location: i32,
}

#[derive(Debug, Error)]
pub enum UniformError {
    #[error("no uniform named {0} in program")]
    NotFound(String),
}
