use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::{debug, info};

/// Table definitions in dependency order. Every statement is idempotent.
const TABLES: &[(&str, &str)] = &[
    (
        "departments",
        r#"
        CREATE TABLE IF NOT EXISTS departments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "faculty",
        r#"
        CREATE TABLE IF NOT EXISTS faculty (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            department_id UUID NULL REFERENCES departments(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "courses",
        r#"
        CREATE TABLE IF NOT EXISTS courses (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            department_id UUID NULL REFERENCES departments(id),
            faculty_id UUID NULL REFERENCES faculty(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "enrolled_teachers",
        r#"
        CREATE TABLE IF NOT EXISTS enrolled_teachers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            faculty_id UUID NOT NULL REFERENCES faculty(id),
            course_id UUID NOT NULL REFERENCES courses(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            UNIQUE (faculty_id, course_id)
        );
        "#,
    ),
    (
        "students",
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            enrollment_no VARCHAR(64) NOT NULL UNIQUE,
            email VARCHAR(255) NOT NULL,
            department_id UUID NULL REFERENCES departments(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "attendance",
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            student_id UUID NOT NULL REFERENCES students(id),
            course_id UUID NOT NULL REFERENCES courses(id),
            attendance_date DATE NOT NULL,
            status VARCHAR(16) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_attendance_status CHECK (status IN ('Present', 'Absent'))
        );
        "#,
    ),
    (
        "timetables",
        r#"
        CREATE TABLE IF NOT EXISTS timetables (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            course_id UUID NOT NULL REFERENCES courses(id),
            day_of_week VARCHAR(16) NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            room VARCHAR(64) NOT NULL,
            instructor_id UUID NOT NULL REFERENCES faculty(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_day_of_week CHECK (day_of_week IN (
                'Monday', 'Tuesday', 'Wednesday', 'Thursday', 'Friday', 'Saturday', 'Sunday'
            )),
            CONSTRAINT non_empty_slot CHECK (start_time <> end_time)
        );
        "#,
    ),
    (
        "semesters",
        r#"
        CREATE TABLE IF NOT EXISTS semesters (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "enrollments",
        r#"
        CREATE TABLE IF NOT EXISTS enrollments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            student_id UUID NOT NULL REFERENCES students(id),
            course_id UUID NOT NULL REFERENCES courses(id),
            semester_id UUID NOT NULL REFERENCES semesters(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            UNIQUE (student_id, course_id, semester_id)
        );
        "#,
    ),
    (
        "sessions",
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            start_year INTEGER NOT NULL,
            end_year INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_year_range CHECK (end_year >= start_year)
        );
        "#,
    ),
    (
        "programs",
        r#"
        CREATE TABLE IF NOT EXISTS programs (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            session_id UUID NOT NULL REFERENCES sessions(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "current_semesters",
        r#"
        CREATE TABLE IF NOT EXISTS current_semesters (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            program_id UUID NOT NULL REFERENCES programs(id),
            semester_id UUID NOT NULL REFERENCES semesters(id),
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_date_range CHECK (end_date >= start_date)
        );
        "#,
    ),
    (
        "course_assignments",
        r#"
        CREATE TABLE IF NOT EXISTS course_assignments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            student_id UUID NOT NULL REFERENCES students(id),
            program_id UUID NOT NULL REFERENCES programs(id),
            session_id UUID NOT NULL REFERENCES sessions(id),
            current_semester_id UUID NOT NULL REFERENCES current_semesters(id),
            course_id UUID NOT NULL REFERENCES courses(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_faculty_department_id ON faculty(department_id)",
    "CREATE INDEX IF NOT EXISTS idx_courses_department_id ON courses(department_id)",
    "CREATE INDEX IF NOT EXISTS idx_courses_faculty_id ON courses(faculty_id)",
    "CREATE INDEX IF NOT EXISTS idx_enrolled_teachers_course_id ON enrolled_teachers(course_id)",
    "CREATE INDEX IF NOT EXISTS idx_students_department_id ON students(department_id)",
    "CREATE INDEX IF NOT EXISTS idx_attendance_student_id ON attendance(student_id)",
    "CREATE INDEX IF NOT EXISTS idx_attendance_course_id ON attendance(course_id)",
    "CREATE INDEX IF NOT EXISTS idx_timetables_day_of_week ON timetables(day_of_week)",
    "CREATE INDEX IF NOT EXISTS idx_timetables_instructor_id ON timetables(instructor_id)",
    "CREATE INDEX IF NOT EXISTS idx_timetables_course_id ON timetables(course_id)",
    "CREATE INDEX IF NOT EXISTS idx_enrollments_course_id ON enrollments(course_id)",
    "CREATE INDEX IF NOT EXISTS idx_programs_session_id ON programs(session_id)",
    "CREATE INDEX IF NOT EXISTS idx_current_semesters_program_id ON current_semesters(program_id)",
    "CREATE INDEX IF NOT EXISTS idx_course_assignments_program_id ON course_assignments(program_id)",
    "CREATE INDEX IF NOT EXISTS idx_course_assignments_session_id ON course_assignments(session_id)",
    "CREATE INDEX IF NOT EXISTS idx_course_assignments_current_semester_id ON course_assignments(current_semester_id)",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    for (table, statement) in TABLES {
        debug!(table, "Creating table");
        sqlx::query(statement).execute(pool).await?;
    }

    for statement in INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
