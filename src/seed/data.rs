//! Reference rows inserted on a fresh database.

pub struct SecretariaSeed {
    pub nombre: &'static str,
    pub descripcion: &'static str,
    pub ubicacion: &'static str,
    pub secretario: &'static str,
    pub telefono: &'static str,
}

pub struct DependenciaSeed {
    pub secretaria: &'static str,
    pub nombre: &'static str,
    pub descripcion: &'static str,
    pub ubicacion_oficina: &'static str,
    pub jefe_oficina: &'static str,
    pub correo_institucional: &'static str,
    pub telefono: &'static str,
}

pub struct EstadoSeed {
    pub nombre: &'static str,
    pub descripcion: &'static str,
    pub activo: bool,
}

pub const SECRETARIAS: [SecretariaSeed; 5] = [
    SecretariaSeed {
        nombre: "Secretaría de Educación",
        descripcion: "Secretaría encargada de la administración y supervisión del sistema educativo municipal",
        ubicacion: "Edificio Central - Piso 3",
        secretario: "Alexis Erazo",
        telefono: "",
    },
    SecretariaSeed {
        nombre: "Secretaría de Salud",
        descripcion: "Secretaría responsable de la gestión de servicios de salud pública municipal",
        ubicacion: "Centro Administrativo - Piso 2",
        secretario: "Dr. Carlos Alberto Hernández",
        telefono: "123-456-7891",
    },
    SecretariaSeed {
        nombre: "Secretaría de Infraestructura",
        descripcion: "Secretaría encargada del desarrollo y mantenimiento de la infraestructura municipal",
        ubicacion: "Edificio Técnico - Piso 1",
        secretario: "Ing. Ana Patricia López",
        telefono: "123-456-7892",
    },
    SecretariaSeed {
        nombre: "Secretaría de Cultura y Deportes",
        descripcion: "Secretaría responsable de promover actividades culturales y deportivas",
        ubicacion: "Casa de la Cultura - Piso 2",
        secretario: "Lic. Roberto José Martínez",
        telefono: "123-456-7893",
    },
    SecretariaSeed {
        nombre: "Secretaría de Tecnología e Innovación",
        descripcion: "Secretaría encargada de la modernización tecnológica del municipio",
        ubicacion: "Centro de Innovación - Piso 4",
        secretario: "Ing. Laura Beatriz Gómez",
        telefono: "123-456-7894",
    },
];

pub const DEPENDENCIAS: [DependenciaSeed; 10] = [
    DependenciaSeed {
        secretaria: "Secretaría de Educación",
        nombre: "Casa de la Cultura",
        descripcion: "Dependencia encargada de supervisar y mejorar la calidad educativa",
        ubicacion_oficina: "Edificio Central - Oficina 301",
        jefe_oficina: "Lic. Carmen Rosa Díaz",
        correo_institucional: "calidad.educativa@municipio.gov.co",
        telefono: "123-456-7801",
    },
    DependenciaSeed {
        secretaria: "Secretaría de Educación",
        nombre: "Dirección de Infraestructura Educativa",
        descripcion: "Dependencia responsable del mantenimiento de instalaciones educativas",
        ubicacion_oficina: "Edificio Central - Oficina 302",
        jefe_oficina: "Ing. Miguel Ángel Torres",
        correo_institucional: "infraestructura.educativa@municipio.gov.co",
        telefono: "123-456-7802",
    },
    DependenciaSeed {
        secretaria: "Secretaría de Salud",
        nombre: "Dirección de Atención Primaria",
        descripcion: "Dependencia encargada de la atención primaria en salud",
        ubicacion_oficina: "Centro Administrativo - Oficina 201",
        jefe_oficina: "Dr. Sandra Milena Vargas",
        correo_institucional: "atencion.primaria@salud.municipio.gov.co",
        telefono: "123-456-7811",
    },
    DependenciaSeed {
        secretaria: "Secretaría de Salud",
        nombre: "Dirección de Vigilancia Epidemiológica",
        descripcion: "Dependencia responsable del control epidemiológico municipal",
        ubicacion_oficina: "Centro Administrativo - Oficina 202",
        jefe_oficina: "Dr. Fernando Javier Ruiz",
        correo_institucional: "epidemiologia@salud.municipio.gov.co",
        telefono: "123-456-7812",
    },
    DependenciaSeed {
        secretaria: "Secretaría de Infraestructura",
        nombre: "Dirección de Obras Públicas",
        descripcion: "Dependencia encargada de la ejecución de obras públicas",
        ubicacion_oficina: "Edificio Técnico - Oficina 101",
        jefe_oficina: "Ing. Pablo César Moreno",
        correo_institucional: "obras.publicas@infraestructura.municipio.gov.co",
        telefono: "123-456-7821",
    },
    DependenciaSeed {
        secretaria: "Secretaría de Infraestructura",
        nombre: "Dirección de Servicios Públicos",
        descripcion: "Dependencia responsable de la supervisión de servicios públicos",
        ubicacion_oficina: "Edificio Técnico - Oficina 102",
        jefe_oficina: "Ing. Gloria Esperanza Silva",
        correo_institucional: "servicios.publicos@infraestructura.municipio.gov.co",
        telefono: "123-456-7822",
    },
    DependenciaSeed {
        secretaria: "Secretaría de Cultura y Deportes",
        nombre: "Dirección de Promoción Cultural",
        descripcion: "Dependencia encargada de promover actividades culturales",
        ubicacion_oficina: "Casa de la Cultura - Oficina 201",
        jefe_oficina: "Lic. Claudia Patricia Ramírez",
        correo_institucional: "promocion.cultural@cultura.municipio.gov.co",
        telefono: "123-456-7831",
    },
    DependenciaSeed {
        secretaria: "Secretaría de Cultura y Deportes",
        nombre: "Dirección de Deportes y Recreación",
        descripcion: "Dependencia responsable de actividades deportivas y recreativas",
        ubicacion_oficina: "Casa de la Cultura - Oficina 202",
        jefe_oficina: "Lic. Andrés Felipe Castro",
        correo_institucional: "deportes.recreacion@cultura.municipio.gov.co",
        telefono: "123-456-7832",
    },
    DependenciaSeed {
        secretaria: "Secretaría de Tecnología e Innovación",
        nombre: "Dirección de Sistemas de Información",
        descripcion: "Dependencia encargada de los sistemas de información municipales",
        ubicacion_oficina: "Centro de Innovación - Oficina 401",
        jefe_oficina: "Ing. Diana Carolina Pérez",
        correo_institucional: "sistemas.informacion@tecnologia.municipio.gov.co",
        telefono: "123-456-7841",
    },
    DependenciaSeed {
        secretaria: "Secretaría de Tecnología e Innovación",
        nombre: "Dirección de Innovación Digital",
        descripcion: "Dependencia responsable de proyectos de innovación digital",
        ubicacion_oficina: "Centro de Innovación - Oficina 402",
        jefe_oficina: "Ing. Julián Camilo Mendoza",
        correo_institucional: "innovacion.digital@tecnologia.municipio.gov.co",
        telefono: "123-456-7842",
    },
];

pub const ESTADOS: [EstadoSeed; 5] = [
    EstadoSeed {
        nombre: "Activo",
        descripcion: "Equipo en funcionamiento normal",
        activo: true,
    },
    EstadoSeed {
        nombre: "Inactivo",
        descripcion: "Equipo fuera de servicio temporalmente",
        activo: false,
    },
    EstadoSeed {
        nombre: "En Mantenimiento",
        descripcion: "Equipo en proceso de mantenimiento",
        activo: false,
    },
    EstadoSeed {
        nombre: "Dañado",
        descripcion: "Equipo con fallas que requieren reparación",
        activo: false,
    },
    EstadoSeed {
        nombre: "Dado de Baja",
        descripcion: "Equipo retirado definitivamente del inventario",
        activo: false,
    },
];
